//! 日志初始化
//!
//! 基于 tracing。TUI 占用终端，因此查看器模式写日志文件，
//! 其他命令写 stderr。`RUST_LOG` 优先于 `-v` 参数。

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志详细程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// 只输出警告和错误
    #[default]
    Normal,
    /// info 及以上
    Verbose,
    /// debug 及以上
    Debug,
    /// 全部
    Trace,
}

impl Verbosity {
    /// 由 `-v` 出现次数换算
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let default_filter = format!("c172_checklist={}", self.to_level());
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    }
}

/// 初始化 stderr 日志（非交互命令）
pub fn init_logging(verbosity: Verbosity) {
    let subscriber = tracing_subscriber::registry()
        .with(verbosity.env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        );

    // 已初始化时忽略
    let _ = subscriber.try_init();
}

/// 初始化文件日志（TUI 模式）
pub fn init_file_logging(verbosity: Verbosity, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let subscriber = tracing_subscriber::registry()
        .with(verbosity.env_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        );

    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_verbosity_from_occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_occurrences(7), Verbosity::Trace);
    }

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Normal.to_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.to_level(), Level::INFO);
        assert_eq!(Verbosity::Debug.to_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn test_init_file_logging_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logs").join("checklist.log");

        init_file_logging(Verbosity::Normal, &path).unwrap();
        assert!(path.exists());
    }
}
