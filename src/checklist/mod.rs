//! 检查单模块
//!
//! 数据模型与加载器（严格解析 + 固定兜底）

pub mod models;
pub mod parser;

// 重导出
pub use models::*;
pub use parser::*;
