//! Configuration types for the engine

use crate::error::{EngineError, Result};
use reword_core::{Backend, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Store backend, fixed for the lifetime of a rewriter
    pub backend: Backend,
    /// Separator between key and value in rule lines
    pub delimiter: String,
    /// Treat malformed rule lines as errors instead of skipping them
    pub strict_rules: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            strict_rules: false,
        }
    }
}

impl EngineConfig {
    /// Default configuration using `backend`
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Check values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(EngineError::ConfigError(
                "rule delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
