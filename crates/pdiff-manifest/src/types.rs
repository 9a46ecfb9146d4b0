//! Plugin manifest types
//!
//! This module provides:
//! - `PluginRecord`, one manifest entry keyed by its internal name
//! - `Manifest`, the ordered record list as it appears on disk
//! - `HashLookup`, an insertion-ordered name -> hash prefix mapping

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of hash characters shown in reports and used for comparison
pub const HASH_PREFIX_LEN: usize = 12;

// =============================================================================
// MANIFEST
// =============================================================================

/// Ordered list of plugin records, deserialized from a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub records: Vec<PluginRecord>,
}

/// A single plugin entry. Fields other than the name and hash are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    #[serde(rename = "internalName")]
    pub internal_name: Arc<str>,
    pub sha256: Arc<str>,
}

impl PluginRecord {
    pub fn new(internal_name: &str, sha256: &str) -> Self {
        PluginRecord {
            internal_name: Arc::from(internal_name),
            sha256: Arc::from(sha256),
        }
    }

    /// Short form of the hash used for display
    pub fn hash_prefix(&self) -> Arc<str> {
        Arc::from(hash_prefix(&self.sha256))
    }
}

/// First `HASH_PREFIX_LEN` characters of `hash`, or all of it when shorter.
pub fn hash_prefix(hash: &str) -> &str {
    match hash.char_indices().nth(HASH_PREFIX_LEN) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}

// =============================================================================
// HASH LOOKUP - ordered map with O(1) name lookup
// =============================================================================

/// Name -> hash prefix mapping that remembers first-insertion order.
///
/// Re-inserting an existing name replaces its hash but keeps its position,
/// so the last record for a duplicated name wins.
#[derive(Debug, Clone, Default)]
pub struct HashLookup {
    entries: Vec<(Arc<str>, Arc<str>)>,

    /// Position of each name in `entries`
    index: AHashMap<Arc<str>, usize>,
}

impl HashLookup {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PluginRecord>,
    {
        let mut lookup = HashLookup::default();
        for record in records {
            lookup.insert(record.internal_name.clone(), record.hash_prefix());
        }
        lookup
    }

    pub fn insert(&mut self, name: Arc<str>, hash: Arc<str>) {
        if let Some(&idx) = self.index.get(&name) {
            self.entries[idx].1 = hash;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, hash));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<str>> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<str>)> {
        self.entries.iter().map(|(name, hash)| (name, hash))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prefix_takes_twelve_chars() {
        assert_eq!(hash_prefix("111111111111xxxx"), "111111111111");
        assert_eq!(
            hash_prefix("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            "e3b0c44298fc"
        );
    }

    #[test]
    fn test_hash_prefix_short_hash_kept_whole() {
        assert_eq!(hash_prefix("abc"), "abc");
        assert_eq!(hash_prefix(""), "");
        assert_eq!(hash_prefix("123456789012"), "123456789012");
    }

    #[test]
    fn test_hash_prefix_counts_characters_not_bytes() {
        assert_eq!(hash_prefix("ääääääääääääää"), "ääääääääääää");
    }

    #[test]
    fn test_lookup_last_duplicate_wins_and_keeps_position() {
        let records = [
            PluginRecord::new("A", "aaaaaaaaaaaa0000"),
            PluginRecord::new("B", "bbbbbbbbbbbb0000"),
            PluginRecord::new("A", "cccccccccccc0000"),
        ];
        let lookup = HashLookup::from_records(&records);

        assert_eq!(lookup.len(), 2);
        assert!(lookup.get("A").is_some_and(|h| h.as_ref() == "cccccccccccc"));

        let names: Vec<&str> = lookup.iter().map(|(name, _)| name.as_ref()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_record_ignores_extra_fields() {
        let json = r#"{"internalName": "Herbiboar", "sha256": "deadbeef", "version": "1.2.0"}"#;
        let record: Result<PluginRecord, _> = serde_json::from_str(json);
        assert!(record.is_ok_and(|r| r == PluginRecord::new("Herbiboar", "deadbeef")));
    }

    #[test]
    fn test_record_requires_hash() {
        let record: Result<PluginRecord, _> = serde_json::from_str(r#"{"internalName": "X"}"#);
        assert!(record.is_err());
    }
}
