//! pdiff Manifest Handling
//!
//! This crate holds the plugin manifest types and the comparison logic for
//! pdiff. A manifest is a JSON array of plugin records keyed by
//! `internalName`; two revisions of it are compared by hash prefix.
//!
//! Everything here is pure except `Manifest::load_from_path`. Fetching the
//! previous revision and printing are left to the caller.

pub mod baseline;
pub mod diff;
pub mod errors;
pub mod manifest;
pub mod report;
pub mod types;

pub use baseline::{Baseline, NoBaseline};
pub use diff::{diff, Change, DiffReport};
pub use errors::ManifestError;
pub use report::ReportStyle;
pub use types::{hash_prefix, HashLookup, Manifest, PluginRecord, HASH_PREFIX_LEN};
