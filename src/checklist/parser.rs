//! 检查单解析器
//!
//! 严格解析 + 固定兜底：任何结构错误都整体放弃，不做逐项恢复

use thiserror::Error;

use super::{Checklist, Section};

/// 兜底检查单的机型名称
pub const FALLBACK_AIRCRAFT: &str = "C172";

/// 兜底检查单的免责声明
pub const FALLBACK_DISCLAIMER: &str = "Fallback";

/// 检查单数据格式错误
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// JSON 语法错误、缺少字段、类型不符或非 UTF-8 内容
    #[error("malformed checklist data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChecklistError {
    /// 出错位置 (行, 列)，从 1 开始
    pub fn location(&self) -> (usize, usize) {
        match self {
            ChecklistError::Json(e) => (e.line(), e.column()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 解析
// ═══════════════════════════════════════════════════════════════════

/// 严格解析检查单
///
/// 必需字段：`aircraft`, `disclaimer`, `sections`；每个分组需要 `id`, `title`, `items`。
/// 缺字段、类型错误（包括 `null`）或 JSON 语法错误都会导致整体失败。
/// 未知的额外字段会被忽略。
pub fn parse_checklist(raw: &[u8]) -> Result<Checklist, ChecklistError> {
    let checklist: Checklist = serde_json::from_slice(raw)?;
    Ok(checklist)
}

/// 固定的兜底检查单
pub fn fallback_checklist() -> Checklist {
    Checklist {
        aircraft: FALLBACK_AIRCRAFT.to_string(),
        disclaimer: FALLBACK_DISCLAIMER.to_string(),
        sections: vec![Section {
            id: "default".to_string(),
            title: "Checklist".to_string(),
            items: vec!["Example item 1".to_string(), "Example item 2".to_string()],
        }],
    }
}

/// 是否就是兜底检查单
///
/// 按整体内容比较，合法数据里恰好写着 "Fallback" 的免责声明不算兜底。
pub fn is_fallback(checklist: &Checklist) -> bool {
    *checklist == fallback_checklist()
}

/// 加载检查单，解析失败时返回兜底检查单
///
/// 从不向外返回错误：数据损坏时应用仍然可以渲染。
pub fn load(raw: &[u8]) -> Checklist {
    match parse_checklist(raw) {
        Ok(checklist) => {
            tracing::debug!(
                aircraft = %checklist.aircraft,
                sections = checklist.sections.len(),
                "checklist loaded"
            );
            checklist
        }
        Err(e) => {
            let (line, column) = e.location();
            tracing::warn!(error = %e, line, column, "checklist data rejected, using fallback");
            fallback_checklist()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
