//! Cycle-safe rule insertion
//!
//! The store doubles as the adjacency list of the replacement graph: every
//! key has at most one outgoing edge, to its value. A candidate rule
//! `key -> value` closes a cycle exactly when the chain starting at `value`
//! reaches `key`. Since the graph is acyclic before the insertion, that
//! walk ends after at most `len` lookups.

use crate::error::{CoreError, Result};
use crate::rule::Rule;
use crate::store::ReplacementStore;

/// Validates candidate rules against the current store contents
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleGuard;

impl CycleGuard {
    /// Check whether `key -> value` can be added without creating a cycle
    pub fn check(store: &dyn ReplacementStore, key: &str, value: &str) -> Result<()> {
        if key == value {
            return Err(CoreError::SelfLoop {
                key: key.to_string(),
            });
        }

        if Self::chain(store, value).any(|word| word == key) {
            return Err(CoreError::Cycle {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }

    /// Check `rule` and, if it is safe, put it into `store`
    pub fn insert(store: &mut dyn ReplacementStore, rule: Rule) -> Result<()> {
        Self::check(store, &rule.key, &rule.value)?;
        store.put(rule.key, rule.value);
        Ok(())
    }

    /// Replacement chain starting at `start`: `start`, then its value, then
    /// that value's value, until a word with no mapping is reached.
    pub fn chain<'a>(store: &'a dyn ReplacementStore, start: &'a str) -> Chain<'a> {
        Chain {
            store,
            next: Some(start),
            remaining: store.len() + 1,
        }
    }
}

/// Iterator over a replacement chain, see [`CycleGuard::chain`]
pub struct Chain<'a> {
    store: &'a dyn ReplacementStore,
    next: Option<&'a str>,
    // len + 1 steps; only a store filled without the guard can need more.
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next?;
        self.next = self.store.get(current);
        Some(current)
    }
}
