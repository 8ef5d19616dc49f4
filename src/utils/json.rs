//! JSON 工具

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 读取 JSON 文件
pub fn read_json<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_json() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.json");
        fs::write(&file_path, r#"{"name":"test","value":42}"#).unwrap();

        let loaded: TestData = read_json(&file_path).unwrap();
        assert_eq!(
            loaded,
            TestData {
                name: "test".to_string(),
                value: 42
            }
        );
    }

    #[test]
    fn test_read_json_error_mentions_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("broken.json");
        fs::write(&file_path, "{").unwrap();

        let err = read_json::<TestData>(&file_path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
