//! 按键帮助弹窗

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("←/h  →/l", "previous / next section"),
    ("1-9  Tab", "jump to section"),
    ("↑/k  ↓/j", "move cursor"),
    ("Space/Enter", "check / uncheck item"),
    ("r", "reset current section"),
    ("mouse", "click tab or item, scroll sideways to switch"),
    ("q/Esc", "quit"),
];

/// 渲染帮助弹窗（居中）
pub fn render_help(frame: &mut Frame, area: Rect) {
    let width = area.width.min(60);
    let height = area.height.min(BINDINGS.len() as u16 + 4);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let mut lines = vec![Line::from("")];
    for (keys, desc) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<12}", keys),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*desc),
        ]));
    }

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
