//! 勾选状态模块
//!
//! 同一时刻只保存当前分组的一组勾选标记：
//! - 切换分组（标签或翻页）丢弃旧状态，新建全 false 序列
//! - 重置只清空当前分组，不改变当前分组
//! - 越界操作属于调用方的契约错误，直接 panic

use crate::checklist::Checklist;

/// 当前激活分组及其勾选标记
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveSection {
    index: usize,
    id: String,
    checks: Vec<bool>,
}

/// 勾选状态
///
/// 只有一个可选值而不是 "分组 -> 标记" 的映射，
/// 因此不可能残留其他分组的状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    active: Option<ActiveSection>,
}

impl SessionState {
    /// 创建空状态（没有激活分组）
    pub fn new() -> Self {
        Self::default()
    }

    /// 为检查单创建状态，激活第一个分组（如果有）
    pub fn for_checklist(checklist: &Checklist) -> Self {
        let mut state = Self::new();
        if !checklist.is_empty() {
            state.select(checklist, 0);
        }
        state
    }

    /// 选择分组
    ///
    /// 无论是否为当前分组，都会重新建立全 false 序列。
    ///
    /// # Panics
    ///
    /// `index` 超出分组数量时 panic。
    pub fn select(&mut self, checklist: &Checklist, index: usize) {
        let section = checklist.section(index).unwrap_or_else(|| {
            panic!(
                "section index {} out of range (checklist has {} sections)",
                index,
                checklist.len()
            )
        });

        tracing::debug!(index, id = %section.id, items = section.items.len(), "section selected");

        self.active = Some(ActiveSection {
            index,
            id: section.id.clone(),
            checks: vec![false; section.items.len()],
        });
    }

    /// 切换第 `item` 项的勾选状态
    ///
    /// 没有激活分组时不做任何事。
    ///
    /// # Panics
    ///
    /// `item` 超出当前分组的检查项数量时 panic。
    pub fn toggle(&mut self, item: usize) {
        if let Some(active) = self.active.as_mut() {
            assert!(
                item < active.checks.len(),
                "item index {} out of range for section '{}' ({} items)",
                item,
                active.id,
                active.checks.len()
            );
            active.checks[item] = !active.checks[item];
        }
    }

    /// 清空当前分组的所有勾选，保持当前分组不变
    pub fn reset(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.checks.iter_mut().for_each(|c| *c = false);
            tracing::debug!(id = %active.id, "section reset");
        }
    }

    /// 当前分组索引
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// 当前分组 ID
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.id.as_str())
    }

    /// 当前分组的勾选标记（没有激活分组时为空）
    pub fn checks(&self) -> &[bool] {
        self.active
            .as_ref()
            .map(|a| a.checks.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_checked(&self, item: usize) -> bool {
        self.checks().get(item).copied().unwrap_or(false)
    }

    /// 已勾选数量
    pub fn checked_count(&self) -> usize {
        self.checks().iter().filter(|c| **c).count()
    }

    /// 当前分组是否全部勾选（空分组不算完成）
    pub fn is_complete(&self) -> bool {
        let checks = self.checks();
        !checks.is_empty() && checks.iter().all(|c| *c)
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
