//! Manifest operations - loading and lookup construction

use crate::errors::ManifestError;
use crate::types::{HashLookup, Manifest, PluginRecord};
use std::path::Path;
use tracing::debug;

impl Manifest {
    pub fn new(records: Vec<PluginRecord>) -> Self {
        Manifest { records }
    }

    /// Load the manifest at `path`. Unlike a baseline, a missing or malformed
    /// file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading manifest from {:?}", path);
        let content = std::fs::read(path)?;
        let manifest = Self::from_slice(&content)?;
        debug!("Loaded {} plugin record(s)", manifest.len());
        Ok(manifest)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ManifestError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build the name -> hash prefix lookup used for diffing
    pub fn lookup(&self) -> HashLookup {
        HashLookup::from_records(&self.records)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PluginRecord;
    type IntoIter = std::slice::Iter<'a, PluginRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<PluginRecord> for Manifest {
    fn from_iter<I: IntoIterator<Item = PluginRecord>>(iter: I) -> Self {
        Manifest::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("plugins.json");
        let written = fs::write(
            &path,
            r#"[
                {"internalName": "Herbiboar", "sha256": "0123456789abcdef", "displayName": "Herbiboar"},
                {"internalName": "Thieving", "sha256": "fedcba9876543210"}
            ]"#,
        );
        assert!(written.is_ok());

        let manifest = Manifest::load_from_path(&path);
        assert!(manifest.is_ok(), "Failed to load manifest");
        let manifest = manifest.unwrap_or_default();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.records[0].internal_name.as_ref(), "Herbiboar");
        assert_eq!(manifest.records[1].sha256.as_ref(), "fedcba9876543210");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = Manifest::load_from_path(&temp_dir.path().join("plugins.json"));
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_non_array_is_parse_error() {
        let result = Manifest::from_slice(br#"{"internalName": "A", "sha256": "1"}"#);
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(Manifest::from_slice(b"[]").is_ok_and(|m| m.is_empty()));
    }
}
