//! Layered error types

use reword_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rule graph or backend error from the core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A source could not be opened or read
    #[error("An I/O error occurred reading '{path}': {source}")]
    Io {
        /// Label of the source (file path, `<text>` or `<reader>`)
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A rule line did not have the `key -> value` shape (strict mode only)
    #[error("malformed rule on line {line}: '{content}'")]
    MalformedRule {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// True when a rule would have created a cycle
    pub fn is_cycle(&self) -> bool {
        matches!(self, EngineError::Core(err) if err.is_cycle())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_core_error_is_transparent() {
        let error: EngineError = CoreError::Cycle {
            key: "y".into(),
            value: "x".into(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Cycle detected when trying to add replacement rule: y -> x"
        );
        assert!(error.is_cycle());
    }

    #[test]
    fn test_io_error_display() {
        let error = EngineError::Io {
            path: "rules.txt".into(),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let message = error.to_string();
        assert!(message.starts_with("An I/O error occurred reading 'rules.txt'"));
        assert!(message.contains("valid UTF-8"));
        assert!(!error.is_cycle());
    }

    #[test]
    fn test_malformed_rule_display() {
        let error = EngineError::MalformedRule {
            line: 3,
            content: "cat dog".into(),
        };
        assert_eq!(error.to_string(), "malformed rule on line 3: 'cat dog'");
    }

    #[test]
    fn test_config_error_display() {
        let error = EngineError::ConfigError("delimiter must not be empty".into());
        assert_eq!(
            error.to_string(),
            "invalid configuration: delimiter must not be empty"
        );
    }
}
