//! Output formatting module

use anyhow::Result;
use reword_engine::{Backend, LoadReport, Output};
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write the result of one run
    fn write_output(&mut self, run: &RunResult<'_>) -> Result<()>;

    /// Flush and close the destination
    fn finish(&mut self) -> Result<()>;
}

/// Everything a formatter may report about a run
#[derive(Debug)]
pub struct RunResult<'a> {
    /// Backend used for the store
    pub backend: Backend,
    /// Rule loading summary
    pub rules: LoadReport,
    /// Rewritten text and counters
    pub output: &'a Output,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rewritten text followed by a newline
    #[default]
    Text,
    /// JSON object with the text, rule summary and statistics
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
