// C172 Checklist - Library Root
//
// 检查单加载、勾选状态与终端查看器

pub mod assets;
pub mod checklist;
pub mod config;
pub mod logging;
pub mod session;
pub mod tui;
pub mod utils;

// 重新导出常用类型
pub use assets::{bundled_checklist, resolve_checklist};
pub use checklist::{fallback_checklist, load, parse_checklist, Checklist, ChecklistError, Section};
pub use config::Config;
pub use session::SessionState;
