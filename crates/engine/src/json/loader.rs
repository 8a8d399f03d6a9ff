use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Read the whole file and decode it.
///
/// Any JSON kind is accepted at the top level; callers that expect an object
/// simply find nothing when they walk into something else.
///
/// # Errors
///
/// `EngineError::ReadFailure` when the file cannot be read and
/// `EngineError::ParseFailure` when its content is not valid JSON.
pub fn load_file(path: &Path) -> Result<Value> {
    let data = fs::read(path).map_err(|e| EngineError::read(path, e))?;
    let value = parse_slice(&data).map_err(|e| EngineError::parse(path, e))?;
    log::debug!("{}: loaded {} bytes of JSON", path.display(), data.len());
    Ok(value)
}

fn parse_slice(data: &[u8]) -> serde_json::Result<Value> {
    serde_json::from_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn loads_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1, "customer": {{"name": "Ada"}}}}"#).unwrap();
        let value = load_file(file.path()).unwrap();
        assert_eq!(value, json!({"id": 1, "customer": {"name": "Ada"}}));
    }

    #[test]
    fn missing_file_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("order.json")).unwrap_err();
        assert!(matches!(err, EngineError::ReadFailure { .. }));
    }

    #[test]
    fn malformed_content_is_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1,"#).unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ParseFailure { .. }));
        assert!(err.to_string().starts_with("Failed to parse JSON in"));
    }

    #[test]
    fn non_object_root_is_accepted() {
        assert_eq!(parse_slice(b"[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(parse_slice(b"null").unwrap(), Value::Null);
    }
}
