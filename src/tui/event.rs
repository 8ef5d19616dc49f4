//! 事件系统
//!
//! 统一处理来自终端的事件:
//! - 键盘输入
//! - 鼠标（点击、滚动）
//! - 窗口大小变化
//! - 定时器 tick

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// TUI 事件类型
#[derive(Debug)]
pub enum Event {
    /// 键盘事件
    Key(KeyEvent),

    /// 鼠标事件
    Mouse(MouseEvent),

    /// 窗口大小变化
    Resize(u16, u16),

    /// 定时器 tick（用于渲染刷新）
    Tick,

    /// 错误事件
    Error(String),
}

/// 事件处理器
pub struct EventHandler {
    /// 事件接收端
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// 创建新的事件处理器并启动事件循环
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        // 启动终端事件监听线程
        thread::spawn(move || {
            loop {
                // 使用 poll 来实现非阻塞的事件检测
                if event::poll(tick_rate).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => tx.send(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => tx.send(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                        Ok(_) => Ok(()), // 忽略其他事件
                        Err(e) => {
                            let _ = tx.send(Event::Error(e.to_string()));
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }
                } else if tx.send(Event::Tick).is_err() {
                    // 接收端已关闭
                    break;
                }
            }
        });

        Self { rx }
    }

    /// 获取下一个事件 (阻塞)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
