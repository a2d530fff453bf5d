use super::ItemSource;
use crate::error::{CurioError, Result};
use crate::model::Item;
use serde::de::Error as _;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonFileSource {
    fn items(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Err(CurioError::ItemsNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        parse_items(&content)
    }

    fn version(&self) -> u64 {
        fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// Items exported from the collection API, either as a bare array or wrapped
/// as `{"items": [...]}`. Records are read one by one so an error names the
/// record at fault.
fn parse_items(content: &str) -> Result<Vec<Item>> {
    let records = match serde_json::from_str(content)? {
        Value::Array(records) => records,
        Value::Object(mut wrapper) => match wrapper.remove("items") {
            Some(Value::Array(records)) => records,
            _ => return Err(layout_error()),
        },
        _ => return Err(layout_error()),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| CurioError::InvalidItem { index, source })
        })
        .collect()
}

fn layout_error() -> CurioError {
    CurioError::Serialization(serde_json::Error::custom(
        "expected an array of items or an object with an \"items\" array",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"[{"title": "Vase"}, {"title": "Clock", "quantity": 2}]"#).unwrap();

        let items = JsonFileSource::new(&path).items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].quantity, Some(2.0));
    }

    #[test]
    fn reads_wrapped_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"items": [{"title": "Vase"}]}"#).unwrap();

        let items = JsonFileSource::new(&path).items().unwrap();
        assert_eq!(items[0].title, "Vase");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.items(), Err(CurioError::ItemsNotFound(_))));
        assert_eq!(source.version(), 0);
    }

    #[test]
    fn malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(
            JsonFileSource::new(&path).items(),
            Err(CurioError::Serialization(_))
        ));
    }

    #[test]
    fn sloppy_records_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(
            &path,
            r#"[{"title": "Vase", "artist": null, "quantity": 1}, {"title": "Clock", "quantity": "2"}]"#,
        )
        .unwrap();

        let items = JsonFileSource::new(&path).items().unwrap();
        assert_eq!(items[0].artist, "");
        assert_eq!(items[1].quantity, Some(2.0));
    }

    #[test]
    fn bad_record_is_named_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"[{"title": "Vase"}, {"title": ["not", "text"]}]"#).unwrap();

        let err = JsonFileSource::new(&path).items().unwrap_err();
        assert!(matches!(err, CurioError::InvalidItem { index: 1, .. }));
        assert!(err.to_string().starts_with("Item 1 could not be read"));
    }

    #[test]
    fn unexpected_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"records": []}"#).unwrap();
        assert!(matches!(
            JsonFileSource::new(&path).items(),
            Err(CurioError::Serialization(_))
        ));
    }

    #[test]
    fn version_is_stable_between_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "[]").unwrap();
        let source = JsonFileSource::new(&path);
        assert_ne!(source.version(), 0);
        assert_eq!(source.version(), source.version());
    }
}
