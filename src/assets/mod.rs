//! 嵌入资源管理
//!
//! 使用 rust-embed 将检查单数据编译进二进制；
//! 每个进程只解析一次，结果缓存到进程结束

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::checklist::{fallback_checklist, load, Checklist};

/// 内嵌检查单的文件名
pub const CHECKLIST_FILE: &str = "checklist.json";

/// 检查单数据资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/"]
pub struct ChecklistAssets;

lazy_static! {
    static ref BUNDLED: Checklist = match bundled_raw() {
        Some(raw) => load(&raw),
        None => {
            tracing::warn!("bundled {} not found, using fallback", CHECKLIST_FILE);
            fallback_checklist()
        }
    };
}

/// 获取内嵌检查单的原始字节
pub fn bundled_raw() -> Option<Cow<'static, [u8]>> {
    ChecklistAssets::get(CHECKLIST_FILE).map(|file| file.data)
}

/// 获取内嵌检查单（首次调用时解析，之后复用）
pub fn bundled_checklist() -> &'static Checklist {
    &BUNDLED
}

/// 从外部文件加载检查单
///
/// 文件读取失败返回错误；文件内容格式错误时与内嵌数据一样走兜底。
pub fn load_from_path(path: &Path) -> Result<Checklist> {
    let raw = fs::read(path)
        .with_context(|| format!("Failed to read checklist file: {}", path.display()))?;

    Ok(load(&raw))
}

/// 按需选择数据源：给定路径时读文件，否则用内嵌数据
pub fn resolve_checklist(path: Option<&Path>) -> Result<Checklist> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(bundled_checklist().clone()),
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
