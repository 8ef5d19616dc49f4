//! 工具模块
//!
//! 提供 JSON 等常用工具函数

pub mod json;

// 重导出
pub use json::*;
