//! UI 组件模块
//!
//! 包含所有 TUI 界面组件

mod header;
mod help;
mod layout;
mod section_view;
mod status_bar;
mod tabs;

pub use header::render_header;
pub use help::render_help;
pub use layout::{display_width, render, tab_label, tab_strip, ScreenLayout, TabSlot, TAB_DIVIDER};
pub use section_view::{render_section, POH_NOTICE};
pub use status_bar::render_status_bar;
pub use tabs::render_tabs;
