//! Resolution of the git executable
//!
//! An explicitly configured path wins; otherwise git is looked up on `PATH`.
//! When nothing is found the bare program name is used and the operating
//! system gets the final say when the process is spawned.

use std::path::{Path, PathBuf};
use thiserror::Error;
use which::which;

/// Program name of git on this platform
#[cfg(windows)]
pub const GIT_EXE: &str = "git.exe";
#[cfg(not(windows))]
pub const GIT_EXE: &str = "git";

/// Error type for git path resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitPathError {
    /// A configured git path does not point at a file
    #[error("Configured git executable not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Resolve the git executable to run
///
/// # Arguments
///
/// * `configured` - The `git-path` value from configuration, if any
///
/// # Returns
///
/// The configured path if it exists, the `PATH` hit for git, or the bare
/// program name as a last resort
pub fn resolve_git(configured: Option<&Path>) -> Result<PathBuf, GitPathError> {
    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(GitPathError::NotFound(path.to_path_buf()));
    }

    Ok(which(GIT_EXE).unwrap_or_else(|_| PathBuf::from(GIT_EXE)))
}
