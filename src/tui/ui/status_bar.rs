//! 状态栏组件
//!
//! 显示当前模式、勾选进度和状态信息

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::{App, AppMode};

/// 渲染状态栏
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    // 模式指示器
    let mode_span = match app.mode {
        AppMode::Normal => Span::styled(
            " CHECK ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        AppMode::Help => Span::styled(
            " HELP ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    // 进度
    let session = app.session();
    let total = session.checks().len();
    let progress_style = if session.is_complete() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let progress_span = Span::styled(
        format!(" {}/{} ", session.checked_count(), total),
        progress_style,
    );

    // 状态消息
    let status_span = Span::styled(
        format!(" {} ", app.status_message),
        Style::default().fg(Color::White),
    );

    let line = Line::from(vec![mode_span, progress_span, status_span]);
    let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
