use crate::error::CommonError;
use crate::result::CommonResult;
use crate::record::SectionRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where section records come from (content API snapshot, fixtures, ...)
pub trait RecordSource {
    /// Load the record for a section; `Ok(None)` when the API has none
    fn load(&self, section: &str) -> CommonResult<Option<SectionRecord>>;
}

/// Records stored as `<dir>/<section>.json`
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, section: &str) -> PathBuf {
        self.root.join(format!("{section}.json"))
    }
}

impl RecordSource for DirectorySource {
    fn load(&self, section: &str) -> CommonResult<Option<SectionRecord>> {
        let path = self.path_for(section);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| CommonError::InvalidRecord {
                section: section.to_string(),
                source,
            })?;

        // An explicit `null` document means the section is absent
        if value.is_null() {
            return Ok(None);
        }

        SectionRecord::from_value(value).map(Some)
    }
}

/// In-memory records for testing
pub struct MemorySource {
    pub records: HashMap<String, SectionRecord>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn add_record(&mut self, section: impl Into<String>, record: SectionRecord) {
        self.records.insert(section.into(), record);
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for MemorySource {
    fn load(&self, section: &str) -> CommonResult<Option<SectionRecord>> {
        Ok(self.records.get(section).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_source_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        assert!(source.load("hero").unwrap().is_none());
    }

    #[test]
    fn test_directory_source_reads_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mission.json"), r#"{"heading": "Our Mission"}"#).unwrap();

        let source = DirectorySource::new(dir.path());
        let record = source.load("mission").unwrap().unwrap();

        assert_eq!(record.get("heading"), Some(&json!("Our Mission")));
    }

    #[test]
    fn test_directory_source_null_document_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("about.json"), "null").unwrap();

        let source = DirectorySource::new(dir.path());
        assert!(source.load("about").unwrap().is_none());
    }

    #[test]
    fn test_directory_source_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cta.json"), "{ not json").unwrap();

        let source = DirectorySource::new(dir.path());
        let err = source.load("cta").unwrap_err();
        assert!(matches!(err, CommonError::InvalidRecord { .. }));
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new();
        source.add_record(
            "hero",
            SectionRecord::from_value(json!({"heading": "Welcome"})).unwrap(),
        );

        assert!(source.load("hero").unwrap().is_some());
        assert!(source.load("contact").unwrap().is_none());
    }
}
