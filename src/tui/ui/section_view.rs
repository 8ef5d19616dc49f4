//! 分组页面
//!
//! 分组标题、免责声明和带复选框的检查项列表

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::App;

/// 每个分组页面都显示的固定提示
pub const POH_NOTICE: &str = "Training/reference only. Always follow your specific aircraft POH/AFM.";

/// 渲染分组页面
pub fn render_section(frame: &mut Frame, header_area: Rect, items_area: Rect, app: &App) {
    let Some(section) = app.current_section() else {
        let empty = Paragraph::new(Span::styled(
            " No sections in checklist",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, header_area);
        return;
    };

    // 头部
    let mut header = vec![Line::from(Span::styled(
        format!(" {}", section.title),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !app.checklist.disclaimer.is_empty() {
        header.push(Line::from(Span::styled(
            format!(" {}", app.checklist.disclaimer),
            Style::default().fg(Color::Yellow),
        )));
    }
    header.push(Line::from(Span::styled(
        format!(" {}", POH_NOTICE),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: false }),
        header_area,
    );

    // 检查项
    if section.items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No items in this section",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, items_area);
        return;
    }

    let checks = app.checks();
    let lines: Vec<Line> = section
        .items
        .iter()
        .enumerate()
        .skip(app.item_offset)
        .take(items_area.height as usize)
        .map(|(idx, item)| item_line(item, checks[idx], idx == app.cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines), items_area);
}

fn item_line(item: &str, checked: bool, selected: bool) -> Line<'_> {
    let marker = if selected { "▶" } else { " " };
    let checkbox = if checked { "[x]" } else { "[ ]" };

    let mut item_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        item_style = item_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{} ", checkbox), item_style),
        Span::styled(item, item_style),
    ])
}
