//! Baseline lookup through git
//!
//! The previous manifest is read with `git show <rev>:./<file>`, run from the
//! manifest's own directory so any path form resolves inside the repository.
//! Every way this can go wrong is folded into a `Baseline` variant; nothing
//! here fails.

use crate::logger;
use pdiff_manifest::Baseline;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of the manifest to compare against
pub trait BaselineSource {
    fn fetch(&self, manifest_path: &Path) -> Baseline;
}

/// Reads the baseline from a git revision of the working tree
#[derive(Debug, Clone)]
pub struct GitBaseline {
    git: PathBuf,
    rev: String,
}

impl GitBaseline {
    pub fn new(git: PathBuf, rev: impl Into<String>) -> Self {
        GitBaseline {
            git,
            rev: rev.into(),
        }
    }
}

impl BaselineSource for GitBaseline {
    fn fetch(&self, manifest_path: &Path) -> Baseline {
        let target = LookupTarget::new(&self.rev, manifest_path);
        logger::debug(&format!(
            "Running: {} show {} (in {})",
            self.git.display(),
            target.object,
            target.dir.display()
        ));

        let output = match Command::new(&self.git)
            .args(["show", &target.object])
            .current_dir(&target.dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                logger::warn(&format!(
                    "Failed to run {}: {}",
                    self.git.display(),
                    e
                ));
                return Baseline::Empty;
            }
        };

        logger::capture_output(&format!("git show {}", target.object), &output);

        if !output.status.success() {
            logger::debug(&format!(
                "No manifest at {} (git exited with {})",
                target.object, output.status
            ));
            return Baseline::Missing;
        }

        Baseline::from_json_bytes(&output.stdout)
    }
}

/// Where to run `git show` and which object to ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTarget {
    pub dir: PathBuf,
    pub object: String,
}

impl LookupTarget {
    /// `<rev>:./<file name>`, to be resolved from the manifest's directory
    pub fn new(rev: &str, manifest_path: &Path) -> Self {
        let dir = match manifest_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file = manifest_path
            .file_name()
            .unwrap_or(manifest_path.as_os_str());
        LookupTarget {
            dir,
            object: format!("{}:./{}", rev, file.to_string_lossy()),
        }
    }
}
