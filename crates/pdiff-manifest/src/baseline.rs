//! Baseline classification
//!
//! The previous manifest is fetched from version control and may not exist,
//! may be empty, or may not decode. None of these are errors: they collapse
//! into the `Missing` / `Empty` variants and the diff lists every current
//! plugin as added.

use crate::types::{Manifest, PluginRecord};
use serde_json::Value;
use std::num::FpCategory;
use tracing::{debug, warn};

/// The manifest being compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Baseline {
    Loaded(Manifest),
    /// No prior revision, the file did not exist at that revision, or it
    /// held `null`
    Missing,
    /// Prior content was empty, not JSON, or not a list of plugin records
    Empty,
}

/// Why there is nothing to compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBaseline {
    Missing,
    Empty,
}

impl Baseline {
    /// Classify raw content of a previous revision
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(e) => {
                debug!("Previous manifest is not valid JSON: {}", e);
                return Baseline::Empty;
            }
        };

        if value.is_null() {
            debug!("Previous manifest is null");
            return Baseline::Missing;
        }

        if is_falsy(&value) {
            debug!("Previous manifest decoded to an empty value");
            return Baseline::Empty;
        }

        match serde_json::from_value::<Vec<PluginRecord>>(value) {
            Ok(records) => Baseline::Loaded(Manifest::new(records)),
            Err(e) => {
                warn!("Previous manifest is not a list of plugin records: {}", e);
                Baseline::Empty
            }
        }
    }

    /// `None` when there is a non-empty manifest to diff against
    pub fn no_baseline(&self) -> Option<NoBaseline> {
        match self {
            Baseline::Loaded(manifest) if manifest.is_empty() => Some(NoBaseline::Empty),
            Baseline::Loaded(_) => None,
            Baseline::Missing => Some(NoBaseline::Missing),
            Baseline::Empty => Some(NoBaseline::Empty),
        }
    }
}

impl From<Manifest> for Baseline {
    fn from(manifest: Manifest) -> Self {
        Baseline::Loaded(manifest)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
