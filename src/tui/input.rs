//! 输入映射
//!
//! 把键盘、鼠标事件翻译成 `Action`。
//! 标签点击和翻页手势是两个输入通道，最终都落到 `App::select_section`。

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::ui::{tab_strip, ScreenLayout};
use super::App;

/// 用户动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 翻到上一个分组（左滑）
    PreviousSection,
    /// 翻到下一个分组（右滑）
    NextSection,
    /// 直接选择分组（点击标签）
    SelectSection(usize),
    /// 循环切换到下一个标签
    NextTab,
    /// 循环切换到上一个标签
    PreviousTab,
    CursorUp,
    CursorDown,
    /// 切换光标所在项
    ToggleCursor,
    /// 切换指定项（鼠标点击）
    ToggleItem(usize),
    /// 重置当前分组
    Reset,
    ToggleHelp,
    Quit,
}

/// 键盘事件 -> 动作
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousSection),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSection),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SelectSection(c as usize - '1' as usize)),
        _ => None,
    }
}

/// 鼠标事件 -> 动作
///
/// 需要当前布局来判断点击落在哪个标签或哪一行。
pub fn map_mouse(mouse: MouseEvent, app: &App) -> Option<Action> {
    let (cols, rows) = app.terminal_size;
    let layout = ScreenLayout::from_size(cols, rows);

    match mouse.kind {
        MouseEventKind::ScrollLeft => Some(Action::PreviousSection),
        MouseEventKind::ScrollRight => Some(Action::NextSection),
        MouseEventKind::ScrollUp => Some(Action::CursorUp),
        MouseEventKind::ScrollDown => Some(Action::CursorDown),
        MouseEventKind::Down(MouseButton::Left) => {
            // 标签栏第二行是下边框，不属于任何标签
            if mouse.row == layout.tabs.y && contains(layout.tabs, mouse.column, mouse.row) {
                tab_at(app, &layout, mouse.column).map(Action::SelectSection)
            } else if contains(layout.items, mouse.column, mouse.row) {
                let item = app.item_offset + (mouse.row - layout.items.y) as usize;
                (item < app.checks().len()).then_some(Action::ToggleItem(item))
            } else if mouse.row == layout.header.y && app.reset_hint_contains(mouse.column) {
                Some(Action::Reset)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn tab_at(app: &App, layout: &ScreenLayout, column: u16) -> Option<usize> {
    let titles = app.section_titles();
    let active = app.active_section().unwrap_or(0);
    let column = column.checked_sub(layout.tabs.x)?;

    tab_strip(&titles, active, layout.tabs.width)
        .into_iter()
        .find(|slot| column >= slot.x && column < slot.x + slot.width)
        .map(|slot| slot.index)
}
