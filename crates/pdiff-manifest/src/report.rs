//! Plain-text rendering of a `DiffReport` for CI logs

use crate::baseline::NoBaseline;
use crate::diff::DiffReport;
use std::fmt::Display;
use std::path::Path;

pub const DEFAULT_LABEL: &str = "plugins.json";

/// How report lines are decorated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Prefix for every line
    pub indent: String,
    /// Manifest name used in notices
    pub label: String,
}

impl ReportStyle {
    /// Style labelled with the file name of `manifest_path`
    pub fn for_manifest(manifest_path: &Path, indent: &str) -> Self {
        let label = manifest_path.file_name().map_or_else(
            || DEFAULT_LABEL.to_string(),
            |name| name.to_string_lossy().to_string(),
        );
        ReportStyle {
            indent: indent.to_string(),
            label,
        }
    }

    fn notice(&self, text: &str) -> String {
        format!("{}({})", self.indent, text)
    }

    /// Line printed instead of a diff when the current manifest can't be loaded
    pub fn unreadable(&self, reason: &dyn Display) -> String {
        self.notice(&format!("Unable to read current {}: {}", self.label, reason))
    }

    /// All lines for `report`, notice first
    pub fn render(&self, report: &DiffReport) -> Vec<String> {
        let mut lines = Vec::with_capacity(report.changes.len() + 1);

        match report.no_baseline {
            Some(NoBaseline::Missing) => lines.push(self.notice(&format!(
                "No previous {} found for comparison",
                self.label
            ))),
            Some(NoBaseline::Empty) => {
                lines.push(self.notice(&format!("Previous {} was empty", self.label)));
            }
            None if report.changes.is_empty() => {
                lines.push(self.notice("No plugin changes detected"));
            }
            None => {}
        }

        lines.extend(
            report
                .changes
                .iter()
                .map(|change| format!("{}{}", self.indent, change)),
        );
        lines
    }
}
