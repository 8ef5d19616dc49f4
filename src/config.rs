//! 配置管理
//!
//! 配置文件位于 `<config dir>/c172-checklist/config.json`，所有字段都有默认值。
//! 文件损坏时返回错误，由 main 提示后退回默认值。
//! 命令行参数优先于配置文件。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::utils::read_json;

/// 应用目录名
pub const APP_DIR_NAME: &str = "c172-checklist";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 日志文件名
const LOG_FILE_NAME: &str = "c172-checklist.log";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 外部检查单文件（替代内嵌数据）
    pub checklist_path: Option<PathBuf>,

    /// 事件轮询间隔（毫秒）
    pub tick_rate_ms: u64,

    /// 是否启用鼠标（点击标签、点击勾选、横向滚动翻页）
    pub mouse: bool,

    /// TUI 模式下的日志文件
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checklist_path: None,
            tick_rate_ms: 250,
            mouse: true,
            log_file: None,
        }
    }
}

impl Config {
    /// 从默认位置加载配置，文件不存在时使用默认值
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 从指定文件加载配置
    ///
    /// 文件不存在返回默认值；文件存在但无法解析返回错误，由调用方决定如何提示。
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config: Self = read_json(path)?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// 事件轮询间隔（至少 10ms）
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// TUI 日志文件路径：配置值优先，否则放在数据目录
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME).join(LOG_FILE_NAME)))
    }
}

/// 默认配置文件路径
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.checklist_path, None);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.mouse);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"mouse": false, "checklist_path": "/tmp/c172.json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.mouse);
        assert_eq!(config.checklist_path, Some(PathBuf::from("/tmp/c172.json")));
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_broken_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ checklist_path: oops").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.json"));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"tick_rate_ms": "fast"}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_log_file_override() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/checklist.log")),
            ..Config::default()
        };
        assert_eq!(config.log_file_path(), Some(PathBuf::from("/tmp/checklist.log")));
    }
}
