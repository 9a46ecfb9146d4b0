//! Error types for the pdiff binary

use std::io;
use thiserror::Error;

/// Errors that abort a run. Everything else is reported in the diff output.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}
