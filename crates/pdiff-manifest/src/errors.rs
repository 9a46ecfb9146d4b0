use std::io;
use thiserror::Error;

/// Errors that can occur while loading a plugin manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}
