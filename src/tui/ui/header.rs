//! 标题栏
//!
//! 左侧显示机型，右侧是重置按钮

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::RESET_HINT;
use crate::tui::App;

use super::display_width;

/// 渲染标题栏
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let hint_width = display_width(RESET_HINT);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hint_width)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} Checklist", app.checklist.aircraft),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]));

    let reset = Paragraph::new(Span::styled(
        RESET_HINT,
        Style::default().fg(Color::Black).bg(Color::Yellow),
    ));

    frame.render_widget(title, chunks[0]);
    frame.render_widget(reset, chunks[1]);
}
