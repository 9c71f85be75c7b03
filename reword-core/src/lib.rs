//! Word substitution core for reword
//!
//! This crate holds the deterministic part of the rewriter: the rule model,
//! the replacement store contract with its three backends, the cycle guard
//! that keeps the rule graph acyclic, and the transducer that applies a
//! finished store to text.
//!
//! # Architecture
//!
//! - **Store layer**: [`ReplacementStore`] and the [`BstMap`], [`RbTreeMap`]
//!   and [`ChainedHashMap`] backends, selected through [`Backend`]
//! - **Guard layer**: [`CycleGuard`] walks replacement chains before insertion
//! - **Text layer**: [`Transducer`] rewrites whole words and copies every
//!   other character unchanged
//!
//! # Example
//!
//! ```rust
//! use reword_core::{Backend, CycleGuard, Rule, Transducer};
//!
//! let mut store = Backend::RbTree.create();
//! for rule in [Rule::new("cat", "dog"), Rule::new("dog", "fish")] {
//!     CycleGuard::insert(store.as_mut(), rule).unwrap();
//! }
//!
//! let output = Transducer::new(store.as_ref()).apply("The cat sat.");
//! assert_eq!(output, "The dog sat.\n");
//! ```

pub mod error;
pub mod guard;
pub mod rule;
pub mod store;
pub mod transducer;

pub use error::{CoreError, Result};
pub use guard::{Chain, CycleGuard};
pub use rule::{Rule, DEFAULT_DELIMITER};
pub use store::{Backend, BstMap, ChainedHashMap, RbTreeMap, ReplacementStore};
pub use transducer::{is_word_char, Transducer, TransducerStats};
