//! 终端初始化与恢复
//!
//! 处理 raw mode、alternate screen 和鼠标捕获

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// 终端类型别名
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
///
/// - 进入 raw mode（禁用行缓冲和回显）
/// - 进入 alternate screen（保护原始终端内容）
/// - 启用鼠标捕获（可选）
pub fn init_terminal(mouse: bool) -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

/// 恢复终端
///
/// - 关闭鼠标捕获
/// - 退出 alternate screen
/// - 退出 raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// 安装 panic hook，确保在 panic 时恢复终端
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore_terminal();
        original_hook(panic);
    }));
}
