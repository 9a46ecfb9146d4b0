//! pdiff library - expose modules for testing
//!
//! The binary in `main.rs` only parses arguments and wires these together.

pub mod commands;
pub mod common;
pub mod errors;
pub mod git;

pub use common::GlobalOpts;
pub use pdiff_logger as logger;
