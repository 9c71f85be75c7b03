//! Core error types (deterministic only)

use std::fmt;

/// Errors raised while building a replacement store (no I/O)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A rule maps a word onto itself
    SelfLoop {
        /// The word on both sides of the rule
        key: String,
    },
    /// A rule would close a cycle in the replacement graph
    Cycle {
        /// Key of the rejected rule
        key: String,
        /// Value of the rejected rule
        value: String,
    },
    /// Backend tag outside of `bst`, `rbt` and `hash`
    UnknownBackend(String),
}

impl CoreError {
    /// True for the rule-graph errors (self-loop and transitive cycle)
    pub fn is_cycle(&self) -> bool {
        matches!(self, CoreError::SelfLoop { .. } | CoreError::Cycle { .. })
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::SelfLoop { key } => write!(
                f,
                "Cycle detected when trying to add replacement rule: {key} -> {key}"
            ),
            CoreError::Cycle { key, value } => write!(
                f,
                "Cycle detected when trying to add replacement rule: {key} -> {value}"
            ),
            CoreError::UnknownBackend(tag) => {
                write!(f, "Invalid data structure '{tag}' received.")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
