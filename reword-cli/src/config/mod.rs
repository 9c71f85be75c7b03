//! Configuration module

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use anyhow::Result;
use reword_core::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Rule parsing configuration
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rule-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Separator between key and value
    pub delimiter: String,

    /// Reject malformed rule lines
    pub strict: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            strict: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
