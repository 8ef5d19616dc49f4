//! 检查单数据模型
//!
//! 定义 Checklist, Section 数据结构（对应内嵌的 checklist.json）

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 检查单 - 对应 embedded/checklist.json
///
/// 启动时构建一次，之后只读；UI 只修改勾选状态，从不修改检查单内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// 机型显示名称
    pub aircraft: String,

    /// 免责声明（可以为空）
    pub disclaimer: String,

    /// 按顺序排列的分组
    pub sections: Vec<Section>,
}

/// 检查单分组（一个标签页）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 分组 ID（同一检查单内应唯一）
    pub id: String,

    /// 标签页标题
    pub title: String,

    /// 检查项，每项一条指令
    pub items: Vec<String>,
}

impl Checklist {
    /// 分组数量
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// 按索引获取分组
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// 按 ID 查找分组索引
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// 所有分组的检查项总数
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// 查找重复的分组 ID（按首次重复出现的顺序）
    ///
    /// 加载器不校验 ID 唯一性，这里仅用于 `check` 命令的诊断输出。
    pub fn duplicate_section_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for section in &self.sections {
            if !seen.insert(section.id.as_str()) && !duplicates.contains(&section.id) {
                duplicates.push(section.id.clone());
            }
        }

        duplicates
    }

    /// 渲染为纯文本（带编号）
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{} Checklist\n", self.aircraft);
        if !self.disclaimer.is_empty() {
            out.push_str(&self.disclaimer);
            out.push('\n');
        }

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.to_plain_text());
        }

        out
    }
}

impl Section {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 渲染单个分组为纯文本
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("## {}\n", self.title);
        for (idx, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{:>3}. [ ] {}\n", idx + 1, item));
        }
        out
    }
}
