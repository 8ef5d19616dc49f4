//! 布局管理
//!
//! 定义 TUI 的整体布局结构
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │ C172 Checklist        r reset ...│  标题栏
//! │ 1:Preflight │ 2:Before Start │ … │  标签栏
//! │──────────────────────────────────│
//! │ Before Start                     │  分组标题 + 声明
//! │ Training use only ...            │
//! │ [x] Seat - Adjust                │  检查项列表
//! │ [ ] Brakes - Test                │
//! ├──────────────────────────────────┤
//! │           Status Bar             │
//! └──────────────────────────────────┘
//! ```
//!
//! 鼠标命中检测与渲染共用同一套布局计算。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    Frame,
};

use crate::tui::{App, AppMode};

use super::{render_header, render_help, render_section, render_status_bar, render_tabs};

/// 分组页头部高度（标题、声明、提示、空行）
pub const SECTION_HEADER_HEIGHT: u16 = 4;

/// 标签之间的分隔符
pub const TAB_DIVIDER: &str = "│";

/// 屏幕区域划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub section_header: Rect,
    pub items: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                     // 标题栏
                Constraint::Length(2),                     // 标签栏 + 分隔线
                Constraint::Length(SECTION_HEADER_HEIGHT), // 分组头部
                Constraint::Min(1),                        // 检查项
                Constraint::Length(1),                     // 状态栏
            ])
            .split(area);

        Self {
            header: chunks[0],
            tabs: chunks[1],
            section_header: chunks[2],
            items: chunks[3],
            status: chunks[4],
        }
    }

    /// 由终端尺寸计算布局
    pub fn from_size(cols: u16, rows: u16) -> Self {
        Self::new(Rect::new(0, 0, cols, rows))
    }

    /// 检查项列表可见行数
    pub fn visible_items(&self) -> usize {
        self.items.height as usize
    }
}

/// 标签栏中一个可见标签的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    /// 分组索引
    pub index: usize,
    /// 相对标签栏左侧的起始列
    pub x: u16,
    /// 宽度（含两侧空格）
    pub width: u16,
}

/// 文本在终端中占用的列数（CJK 等宽字符占两列）
pub fn display_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

/// 标签文本
pub fn tab_label(index: usize, title: &str) -> String {
    if index < 9 {
        format!(" {}:{} ", index + 1, title)
    } else {
        format!(" {} ", title)
    }
}

/// 计算可见标签的位置
///
/// 标签总宽度超出时向右滚动，保证当前标签可见（类似可滚动的标签行）。
pub fn tab_strip(titles: &[&str], active: usize, width: u16) -> Vec<TabSlot> {
    let widths: Vec<u16> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| display_width(&tab_label(i, t)))
        .collect();
    let divider = display_width(TAB_DIVIDER);

    // 找到能让 active 完整显示的最小起点
    let active = active.min(titles.len().saturating_sub(1));
    let mut first = 0;
    while first < active {
        let span: u16 = widths[first..=active].iter().sum::<u16>()
            + divider * (active - first) as u16;
        if span <= width {
            break;
        }
        first += 1;
    }

    let mut slots = Vec::new();
    let mut x: u16 = 0;
    for (index, w) in widths.iter().enumerate().skip(first) {
        if x >= width {
            break;
        }
        slots.push(TabSlot {
            index,
            x,
            width: (*w).min(width - x),
        });
        x = x.saturating_add(*w + divider);
    }

    slots
}

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, app);
    render_tabs(frame, layout.tabs, app);
    render_section(frame, layout.section_header, layout.items, app);
    render_status_bar(frame, layout.status, app);

    if app.mode == AppMode::Help {
        render_help(frame, frame.area());
    }
}
