//! Rule loading and rewriting orchestration
//!
//! This crate wires the pieces of `reword-core` into the load-then-rewrite
//! pipeline: rules are read from an [`Input`], checked by the cycle guard
//! and inserted into the configured store, after which the store is only
//! read while text is rewritten.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod rewriter;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use input::Input;
pub use loader::{LoadReport, RuleLoader};
pub use rewriter::{Output, RewriteMetadata, Rewriter, RewriterBuilder};

// Re-export from core for convenience
pub use reword_core::{Backend, CoreError, ReplacementStore, Rule};
