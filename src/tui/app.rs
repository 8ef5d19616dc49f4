//! 应用状态管理
//!
//! `App` 结构体是 TUI 的核心状态容器，持有:
//! - 只读的检查单
//! - 勾选状态（唯一的"当前分组索引"来源）
//! - 光标与滚动位置
//! - 状态消息

use crate::checklist::{Checklist, Section};
use crate::session::SessionState;

use super::input::Action;
use super::ui::{display_width, ScreenLayout};

/// 标题栏右侧的重置提示
pub const RESET_HINT: &str = " [r] Reset ";

/// 应用运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// 正常模式
    Normal,
    /// 按键帮助
    Help,
}

/// 应用状态
pub struct App {
    /// 当前运行模式
    pub mode: AppMode,

    /// 是否应该退出
    pub should_quit: bool,

    /// 检查单（启动后不再修改）
    pub checklist: Checklist,

    /// 勾选状态
    session: SessionState,

    /// 光标所在检查项
    pub cursor: usize,

    /// 检查项列表的首个可见行
    pub item_offset: usize,

    /// 终端尺寸
    pub terminal_size: (u16, u16),

    /// 状态消息（显示在状态栏）
    pub status_message: String,
}

impl App {
    /// 创建新的应用实例，激活第一个分组
    pub fn new(checklist: Checklist, cols: u16, rows: u16) -> Self {
        let session = SessionState::for_checklist(&checklist);
        let status_message = if checklist.is_empty() {
            String::from("No sections in checklist")
        } else {
            String::from("←/→ switch section | Space check | r reset | ? help | q quit")
        };

        Self {
            mode: AppMode::Normal,
            should_quit: false,
            checklist,
            session,
            cursor: 0,
            item_offset: 0,
            terminal_size: (cols, rows),
            status_message,
        }
    }

    /// 以指定分组 ID 打开；ID 不存在时停留在第一个分组
    pub fn open_section(&mut self, id: &str) {
        match self.checklist.position_of(id) {
            Some(index) => self.select_section(index),
            None => {
                tracing::warn!(id, "unknown section id");
                self.status_message = format!("Unknown section '{}'", id);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // 查询
    // ═══════════════════════════════════════════════════════════════════

    pub fn active_section(&self) -> Option<usize> {
        self.session.active_index()
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.active_section()
            .and_then(|index| self.checklist.section(index))
    }

    pub fn checks(&self) -> &[bool] {
        self.session.checks()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.checklist
            .sections
            .iter()
            .map(|s| s.title.as_str())
            .collect()
    }

    /// 标题栏中重置提示所占的列范围
    pub fn reset_hint_contains(&self, column: u16) -> bool {
        let width = display_width(RESET_HINT);
        let start = self.terminal_size.0.saturating_sub(width);
        column >= start && column < self.terminal_size.0
    }

    // ═══════════════════════════════════════════════════════════════════
    // 状态变更
    // ═══════════════════════════════════════════════════════════════════

    /// 执行动作
    pub fn apply(&mut self, action: Action) {
        if self.mode == AppMode::Help {
            // 帮助界面中任意键返回，退出键仍然有效
            match action {
                Action::Quit => self.should_quit = true,
                _ => self.mode = AppMode::Normal,
            }
            return;
        }

        match action {
            Action::PreviousSection => {
                if let Some(index) = self.active_section() {
                    self.select_section(index.saturating_sub(1));
                }
            }
            Action::NextSection => {
                if let Some(index) = self.active_section() {
                    let last = self.checklist.len().saturating_sub(1);
                    self.select_section((index + 1).min(last));
                }
            }
            Action::NextTab => {
                if let Some(index) = self.active_section() {
                    self.select_section((index + 1) % self.checklist.len());
                }
            }
            Action::PreviousTab => {
                if let Some(index) = self.active_section() {
                    let len = self.checklist.len();
                    self.select_section((index + len - 1) % len);
                }
            }
            Action::SelectSection(index) => {
                if index < self.checklist.len() {
                    self.select_section(index);
                }
            }
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::ToggleCursor => {
                if self.cursor < self.checks().len() {
                    self.toggle_item(self.cursor);
                }
            }
            Action::ToggleItem(item) => {
                self.cursor = item;
                self.toggle_item(item);
            }
            Action::Reset => self.reset(),
            Action::ToggleHelp => self.mode = AppMode::Help,
            Action::Quit => self.should_quit = true,
        }
    }

    /// 选择分组 - 标签点击与翻页共用的唯一入口
    ///
    /// 选中已激活的分组不做任何事；切换到其他分组时丢弃原有勾选状态。
    pub fn select_section(&mut self, index: usize) {
        if self.active_section() == Some(index) {
            return;
        }

        self.session.select(&self.checklist, index);
        self.cursor = 0;
        self.item_offset = 0;

        if let Some(section) = self.checklist.section(index) {
            self.status_message = format!("{} - {} items", section.title, section.items.len());
        }
    }

    /// 切换检查项
    pub fn toggle_item(&mut self, item: usize) {
        self.session.toggle(item);

        if self.session.is_complete() {
            if let Some(section) = self.current_section() {
                self.status_message = format!("{} complete", section.title);
            }
        }
    }

    /// 重置当前分组
    pub fn reset(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.item_offset = 0;
        self.status_message = String::from("Checks reset");
    }

    /// 调整终端大小
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
        self.scroll_to_cursor();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.checks().len();
        if len == 0 {
            return;
        }

        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
        self.scroll_to_cursor();
    }

    /// 滚动列表使光标可见
    fn scroll_to_cursor(&mut self) {
        let (cols, rows) = self.terminal_size;
        let visible = ScreenLayout::from_size(cols, rows).visible_items().max(1);

        if self.cursor < self.item_offset {
            self.item_offset = self.cursor;
        } else if self.cursor >= self.item_offset + visible {
            self.item_offset = self.cursor + 1 - visible;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::load;

    fn app() -> App {
        let raw = r#"{"aircraft":"C172","disclaimer":"Training use only.","sections":[
            {"id":"before-start","title":"Before Start","items":["Seat - Adjust","Brakes - Test"]},
            {"id":"runup","title":"Run-up","items":["A","B","C"]},
            {"id":"shutdown","title":"Shutdown","items":["X"]}
        ]}"#;
        App::new(load(raw.as_bytes()), 80, 24)
    }

    #[test]
    fn test_starts_on_first_section() {
        let app = app();
        assert_eq!(app.active_section(), Some(0));
        assert_eq!(app.checks(), &[false, false]);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_tab_and_swipe_share_active_index() {
        let mut app = app();

        app.apply(Action::SelectSection(2));
        assert_eq!(app.active_section(), Some(2));

        app.apply(Action::PreviousSection);
        assert_eq!(app.active_section(), Some(1));
        assert_eq!(app.checks().len(), 3);

        app.apply(Action::NextTab);
        assert_eq!(app.active_section(), Some(2));
    }

    #[test]
    fn test_swipe_clamps_at_ends() {
        let mut app = app();
        app.apply(Action::ToggleCursor);

        app.apply(Action::PreviousSection);
        assert_eq!(app.active_section(), Some(0));
        // 停留在同一分组，不清空
        assert_eq!(app.checks(), &[true, false]);

        app.apply(Action::SelectSection(2));
        app.apply(Action::NextSection);
        assert_eq!(app.active_section(), Some(2));
    }

    #[test]
    fn test_tab_cycles() {
        let mut app = app();
        app.apply(Action::PreviousTab);
        assert_eq!(app.active_section(), Some(2));
        app.apply(Action::NextTab);
        assert_eq!(app.active_section(), Some(0));
    }

    #[test]
    fn test_switching_discards_checks() {
        let mut app = app();
        app.apply(Action::ToggleItem(1));
        assert_eq!(app.checks(), &[false, true]);

        app.apply(Action::NextSection);
        app.apply(Action::PreviousSection);
        assert_eq!(app.checks(), &[false, false]);
    }

    #[test]
    fn test_reset_keeps_section() {
        let mut app = app();
        app.apply(Action::SelectSection(1));
        app.apply(Action::ToggleItem(0));
        app.apply(Action::ToggleItem(2));

        app.apply(Action::Reset);
        assert_eq!(app.active_section(), Some(1));
        assert_eq!(app.checks(), &[false, false, false]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut app = app();
        app.apply(Action::SelectSection(8));
        assert_eq!(app.active_section(), Some(0));
    }

    #[test]
    fn test_cursor_moves_and_toggles() {
        let mut app = app();
        app.apply(Action::CursorDown);
        app.apply(Action::CursorDown);
        assert_eq!(app.cursor, 1);

        app.apply(Action::ToggleCursor);
        assert_eq!(app.checks(), &[false, true]);

        app.apply(Action::CursorUp);
        app.apply(Action::CursorUp);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_completion_message() {
        let mut app = app();
        app.apply(Action::ToggleItem(0));
        app.apply(Action::ToggleItem(1));
        assert_eq!(app.status_message, "Before Start complete");
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let items: Vec<String> = (0..40).map(|i| format!("\"item {}\"", i)).collect();
        let raw = format!(
            r#"{{"aircraft":"C172","disclaimer":"","sections":[{{"id":"long","title":"Long","items":[{}]}}]}}"#,
            items.join(",")
        );
        let mut app = App::new(load(raw.as_bytes()), 80, 24);

        for _ in 0..20 {
            app.apply(Action::CursorDown);
        }
        assert_eq!(app.cursor, 20);
        // 24 行终端可见 16 行
        assert_eq!(app.item_offset, 5);
    }

    #[test]
    fn test_help_mode() {
        let mut app = app();
        app.apply(Action::ToggleHelp);
        assert_eq!(app.mode, AppMode::Help);

        app.apply(Action::NextSection);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.active_section(), Some(0));
    }

    #[test]
    fn test_open_section() {
        let mut app = app();
        app.open_section("shutdown");
        assert_eq!(app.active_section(), Some(2));

        app.open_section("missing");
        assert_eq!(app.active_section(), Some(2));
        assert!(app.status_message.contains("missing"));
    }

    #[test]
    fn test_empty_checklist() {
        let raw = r#"{"aircraft":"C172","disclaimer":"","sections":[]}"#;
        let mut app = App::new(load(raw.as_bytes()), 80, 24);

        app.apply(Action::NextTab);
        app.apply(Action::PreviousTab);
        app.apply(Action::ToggleCursor);
        app.apply(Action::Reset);
        assert_eq!(app.active_section(), None);
        assert!(app.checks().is_empty());
    }

    #[test]
    fn test_reset_hint_hit() {
        let app = app();
        assert!(app.reset_hint_contains(79));
        assert!(app.reset_hint_contains(69));
        assert!(!app.reset_hint_contains(10));
        assert!(!app.reset_hint_contains(80 - display_width(RESET_HINT) - 1));
    }
}
