//! TUI 模块 - 基于 Ratatui 的检查单查看器
//!
//! 核心组件:
//! - `app`: 应用状态管理
//! - `event`: 事件系统 (键盘、鼠标、定时器)
//! - `input`: 事件到动作的映射
//! - `terminal`: 终端初始化与恢复
//! - `ui`: 用户界面组件

pub mod app;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

use anyhow::{bail, Result};
use std::time::Duration;

use crate::checklist::Checklist;

// 重导出常用类型
pub use app::{App, AppMode};
pub use event::{Event, EventHandler};
pub use input::{map_key, map_mouse, Action};
pub use terminal::{init_terminal, install_panic_hook, restore_terminal};

/// 查看器启动参数
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// 启动时打开的分组 ID
    pub section: Option<String>,
    /// 事件轮询间隔
    pub tick_rate: Duration,
    /// 是否启用鼠标
    pub mouse: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            section: None,
            tick_rate: Duration::from_millis(250),
            mouse: true,
        }
    }
}

/// 运行查看器直到用户退出
pub fn run(checklist: Checklist, options: ViewerOptions) -> Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal(options.mouse)?;

    let result = (|| -> Result<()> {
        let size = terminal.size()?;
        let mut app = App::new(checklist, size.width, size.height);
        if let Some(ref id) = options.section {
            app.open_section(id);
        }

        tracing::info!(aircraft = %app.checklist.aircraft, sections = app.checklist.len(), "viewer started");

        let events = EventHandler::new(options.tick_rate);
        while !app.should_quit {
            terminal.draw(|frame| ui::render(frame, &app))?;

            match events.next()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(key) {
                        app.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = map_mouse(mouse, &app) {
                        app.apply(action);
                    }
                }
                Event::Resize(cols, rows) => app.resize(cols, rows),
                Event::Tick => {}
                Event::Error(e) => bail!("terminal event error: {}", e),
            }
        }

        tracing::info!("viewer closed");
        Ok(())
    })();

    restore_terminal()?;
    result
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::load;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let (cols, rows) = app.terminal_size;
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        let raw = r#"{"aircraft":"C172","disclaimer":"Training use only.","sections":[
            {"id":"before-start","title":"Before Start","items":["Seat - Adjust","Brakes - Test"]},
            {"id":"runup","title":"Run-up","items":["Magnetos - Check"]}
        ]}"#;
        App::new(load(raw.as_bytes()), 80, 24)
    }

    #[test]
    fn test_render_first_section() {
        let screen = draw(&app());

        assert!(screen.contains("C172 Checklist"));
        assert!(screen.contains("[r] Reset"));
        assert!(screen.contains("1:Before Start"));
        assert!(screen.contains("2:Run-up"));
        assert!(screen.contains("Training use only."));
        assert!(screen.contains("POH/AFM"));
        assert!(screen.contains("[ ] Seat - Adjust"));
        assert!(screen.contains("[ ] Brakes - Test"));
        assert!(screen.contains("0/2"));
    }

    #[test]
    fn test_render_checked_item() {
        let mut app = app();
        app.apply(Action::ToggleItem(1));

        let screen = draw(&app);
        assert!(screen.contains("[ ] Seat - Adjust"));
        assert!(screen.contains("[x] Brakes - Test"));
        assert!(screen.contains("1/2"));
    }

    #[test]
    fn test_render_after_swipe() {
        let mut app = app();
        app.apply(Action::NextSection);

        let screen = draw(&app);
        assert!(screen.contains("[ ] Magnetos - Check"));
        assert!(!screen.contains("Seat - Adjust"));
    }

    #[test]
    fn test_render_fallback() {
        let app = App::new(load(b"not json"), 80, 24);
        let screen = draw(&app);

        assert!(screen.contains("1:Checklist"));
        assert!(screen.contains("Fallback"));
        assert!(screen.contains("Example item 1"));
        assert!(screen.contains("Example item 2"));
    }

    #[test]
    fn test_render_help() {
        let mut app = app();
        app.apply(Action::ToggleHelp);

        let screen = draw(&app);
        assert!(screen.contains("Keys"));
        assert!(screen.contains("reset current section"));
        assert!(screen.contains("HELP"));
    }

    #[test]
    fn test_render_empty_checklist() {
        let app = App::new(
            load(br#"{"aircraft":"C172","disclaimer":"","sections":[]}"#),
            80,
            24,
        );
        let screen = draw(&app);
        assert!(screen.contains("No sections in checklist"));
    }

    #[test]
    fn test_render_small_terminal() {
        let mut app = app();
        app.resize(20, 8);
        // 不 panic 即可
        draw(&app);
    }
}
