//! Configuration for pdiff
//!
//! A small TOML file can change which manifest is compared, against which
//! revision, with which git binary. Every key is optional.

pub mod config;
pub mod git_path;

pub use config::{Config, ConfigError};
pub use git_path::{resolve_git, GitPathError, GIT_EXE};
