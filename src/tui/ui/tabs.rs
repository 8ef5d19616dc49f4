//! 标签栏组件
//!
//! 每个分组一个标签，超出宽度时滚动到当前标签

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::App;

use super::{tab_label, tab_strip, TAB_DIVIDER};

/// 渲染标签栏
pub fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = app.section_titles();
    let active = app.active_section().unwrap_or(0);
    let slots = tab_strip(&titles, active, area.width);

    let mut spans = Vec::new();
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, Style::default().fg(Color::DarkGray)));
        }

        // 最后一个标签可能超出右边界，由 Paragraph 裁剪
        let label = tab_label(slot.index, titles[slot.index]);

        let style = if app.active_section() == Some(slot.index) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
