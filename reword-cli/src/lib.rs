//! Reword CLI library
//!
//! This library provides the command-line interface for the reword
//! whole-word substitution tool.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod process;

pub use error::{CliError, CliResult};
pub use process::ProcessArgs;
