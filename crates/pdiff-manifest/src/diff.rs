//! Manifest diff
//!
//! Compares the current manifest against a baseline by internal name.
//! Hashes are compared by their 12 character prefix.

use crate::baseline::{Baseline, NoBaseline};
use crate::types::Manifest;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// CHANGE TRACKING
// =============================================================================

/// A single difference between baseline and current manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added {
        name: Arc<str>,
        hash: Arc<str>,
    },
    Removed {
        name: Arc<str>,
        hash: Arc<str>,
    },
    Changed {
        name: Arc<str>,
        old_hash: Arc<str>,
        new_hash: Arc<str>,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Added { name, hash } => write!(f, "+{}: {}", name, hash),
            Change::Removed { name, hash } => write!(f, "-{}: {}", name, hash),
            Change::Changed {
                name,
                old_hash,
                new_hash,
            } => write!(f, "{}: {} -> {}", name, old_hash, new_hash),
        }
    }
}

// =============================================================================
// DIFF REPORT
// =============================================================================

/// Result of comparing two manifests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Set when every current plugin is reported as added for lack of a baseline
    pub no_baseline: Option<NoBaseline>,
    /// Added and changed entries in current order, then removed entries
    pub changes: Vec<Change>,
}

impl DiffReport {
    /// A baseline was present and nothing differs
    pub fn is_unchanged(&self) -> bool {
        self.no_baseline.is_none() && self.changes.is_empty()
    }

    pub fn count_added(&self) -> usize {
        self.count(|c| matches!(c, Change::Added { .. }))
    }

    pub fn count_removed(&self) -> usize {
        self.count(|c| matches!(c, Change::Removed { .. }))
    }

    pub fn count_changed(&self) -> usize {
        self.count(|c| matches!(c, Change::Changed { .. }))
    }

    fn count(&self, pred: impl Fn(&Change) -> bool) -> usize {
        self.changes.iter().filter(|c| pred(c)).count()
    }
}

/// Compare `current` against `previous`
pub fn diff(current: &Manifest, previous: &Baseline) -> DiffReport {
    let old = match previous {
        Baseline::Loaded(manifest) if !manifest.is_empty() => manifest.lookup(),
        _ => {
            // Without a baseline every record is listed, duplicates included.
            let changes = current
                .iter()
                .map(|record| Change::Added {
                    name: record.internal_name.clone(),
                    hash: record.hash_prefix(),
                })
                .collect();
            return DiffReport {
                no_baseline: previous.no_baseline(),
                changes,
            };
        }
    };
    let new = current.lookup();

    let mut changes = Vec::new();

    // New and changed plugins
    for (name, hash) in new.iter() {
        match old.get(name) {
            None => changes.push(Change::Added {
                name: name.clone(),
                hash: hash.clone(),
            }),
            Some(old_hash) if old_hash != hash => changes.push(Change::Changed {
                name: name.clone(),
                old_hash: old_hash.clone(),
                new_hash: hash.clone(),
            }),
            Some(_) => {}
        }
    }

    // Removed plugins
    for (name, hash) in old.iter() {
        if !new.contains(name) {
            changes.push(Change::Removed {
                name: name.clone(),
                hash: hash.clone(),
            });
        }
    }

    DiffReport {
        no_baseline: None,
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PluginRecord;

    fn manifest(records: &[(&str, &str)]) -> Manifest {
        records
            .iter()
            .map(|(name, hash)| PluginRecord::new(name, hash))
            .collect()
    }

    fn lines(report: &DiffReport) -> Vec<String> {
        report.changes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_missing_baseline_lists_all_as_added() {
        let current = manifest(&[("A", "111111111111xxxx"), ("B", "222222222222yyyy")]);
        let report = diff(&current, &Baseline::Missing);

        assert_eq!(report.no_baseline, Some(NoBaseline::Missing));
        assert_eq!(lines(&report), ["+A: 111111111111", "+B: 222222222222"]);
    }

    #[test]
    fn test_empty_baseline_matches_missing_shape() {
        let current = manifest(&[("A", "111111111111xxxx"), ("B", "222222222222yyyy")]);
        let missing = diff(&current, &Baseline::Missing);
        let empty = diff(&current, &Baseline::Empty);

        assert_eq!(empty.no_baseline, Some(NoBaseline::Empty));
        assert_eq!(empty.changes, missing.changes);
    }

    #[test]
    fn test_loaded_but_empty_baseline_is_empty() {
        let current = manifest(&[("A", "111111111111xxxx")]);
        let report = diff(&current, &Baseline::Loaded(Manifest::default()));

        assert_eq!(report.no_baseline, Some(NoBaseline::Empty));
        assert_eq!(lines(&report), ["+A: 111111111111"]);
    }

    #[test]
    fn test_identical_manifests_are_unchanged() {
        let current = manifest(&[("A", "111111111111xxxx"), ("B", "222222222222yyyy")]);
        let report = diff(&current, &Baseline::Loaded(current.clone()));

        assert!(report.is_unchanged());
        assert!(report.changes.is_empty());
    }

    #[test]
    fn test_mixed_diff_order() {
        let previous = manifest(&[
            ("A", "aaaaaaaaaaaa1111"),
            ("B", "bbbbbbbbbbbb2222"),
            ("C", "cccccccccccc3333"),
        ]);
        let current = manifest(&[
            ("A", "aaaaaaaaaaaa1111"),
            ("B", "999999999999ffff"),
            ("D", "dddddddddddd4444"),
        ]);
        let report = diff(&current, &Baseline::Loaded(previous));

        assert_eq!(
            lines(&report),
            [
                "B: bbbbbbbbbbbb -> 999999999999",
                "+D: dddddddddddd",
                "-C: cccccccccccc",
            ]
        );
        assert_eq!(report.count_added(), 1);
        assert_eq!(report.count_changed(), 1);
        assert_eq!(report.count_removed(), 1);
        assert!(!report.is_unchanged());
    }

    #[test]
    fn test_change_beyond_prefix_is_not_reported() {
        let previous = manifest(&[("A", "aaaaaaaaaaaa1111")]);
        let current = manifest(&[("A", "aaaaaaaaaaaa2222")]);

        assert!(diff(&current, &Baseline::Loaded(previous)).is_unchanged());
    }

    #[test]
    fn test_duplicate_names_last_hash_wins() {
        let previous = manifest(&[("A", "111111111111xxxx")]);
        let current = manifest(&[("A", "111111111111xxxx"), ("A", "222222222222yyyy")]);
        let report = diff(&current, &Baseline::Loaded(previous));

        assert_eq!(lines(&report), ["A: 111111111111 -> 222222222222"]);
    }

    #[test]
    fn test_duplicate_names_in_baseline_last_hash_wins() {
        let previous = manifest(&[("A", "000000000000xxxx"), ("A", "111111111111xxxx")]);
        let current = manifest(&[("A", "111111111111xxxx")]);

        assert!(diff(&current, &Baseline::Loaded(previous)).is_unchanged());
    }

    #[test]
    fn test_diff_is_repeatable() {
        let previous = manifest(&[("A", "aaaaaaaaaaaa"), ("C", "cccccccccccc")]);
        let current = manifest(&[("B", "bbbbbbbbbbbb"), ("A", "abababababab")]);
        let baseline = Baseline::Loaded(previous);

        assert_eq!(diff(&current, &baseline), diff(&current, &baseline));
    }

    #[test]
    fn test_empty_current_removes_everything() {
        let previous = manifest(&[("A", "aaaaaaaaaaaa"), ("B", "bbbbbbbbbbbb")]);
        let report = diff(&Manifest::default(), &Baseline::Loaded(previous));

        assert_eq!(lines(&report), ["-A: aaaaaaaaaaaa", "-B: bbbbbbbbbbbb"]);
    }
}
