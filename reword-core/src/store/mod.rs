//! Replacement store contract and backend selection
//!
//! Every backend implements [`ReplacementStore`]. Callers hold a
//! `Box<dyn ReplacementStore>` created once from a [`Backend`] tag and never
//! look at the concrete type again; the choice changes performance only.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod bst;
pub mod hash;
pub mod rbt;

pub use bst::BstMap;
pub use hash::ChainedHashMap;
pub use rbt::RbTreeMap;

/// Word to word mapping used by the rule loader and the transducer
pub trait ReplacementStore: Send + Sync {
    /// Insert a mapping, overwriting any previous value for `key`
    fn put(&mut self, key: String, value: String);

    /// Current value for `key`, if any
    fn get(&self, key: &str) -> Option<&str>;

    /// Number of distinct keys
    fn len(&self) -> usize;

    /// Check if the store holds no mappings
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `key` has a mapping
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All mappings. Tree backends yield them ordered by key; the hash
    /// backend gives no ordering guarantee.
    fn entries(&self) -> Vec<(&str, &str)>;

    /// Tag of the backend behind this store
    fn backend(&self) -> Backend;
}

impl fmt::Debug for dyn ReplacementStore + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementStore")
            .field("backend", &self.backend())
            .field("len", &self.len())
            .finish()
    }
}

/// Closed set of store backends
///
/// Serialized as its canonical tag; deserialized through [`FromStr`], so any
/// letter case is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Backend {
    /// Unbalanced binary search tree
    Bst,
    /// Left-leaning red-black tree
    RbTree,
    /// Separate-chaining hash table
    #[default]
    Hash,
}

impl Backend {
    /// All backends, in tag order
    pub const ALL: [Backend; 3] = [Backend::Bst, Backend::RbTree, Backend::Hash];

    /// Canonical tag
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Bst => "bst",
            Backend::RbTree => "rbt",
            Backend::Hash => "hash",
        }
    }

    /// Create an empty store of this kind
    pub fn create(self) -> Box<dyn ReplacementStore> {
        match self {
            Backend::Bst => Box::new(BstMap::new()),
            Backend::RbTree => Box::new(RbTreeMap::new()),
            Backend::Hash => Box::new(ChainedHashMap::new()),
        }
    }

    /// True for the backends that keep keys ordered
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Backend::Hash)
    }
}

impl FromStr for Backend {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "bst" => Ok(Backend::Bst),
            "rbt" => Ok(Backend::RbTree),
            "hash" => Ok(Backend::Hash),
            _ => Err(CoreError::UnknownBackend(tag.to_string())),
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = CoreError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<Backend> for &'static str {
    fn from(backend: Backend) -> Self {
        backend.name()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str_case_insensitive() {
        assert_eq!("bst".parse::<Backend>().unwrap(), Backend::Bst);
        assert_eq!("RBT".parse::<Backend>().unwrap(), Backend::RbTree);
        assert_eq!("Hash".parse::<Backend>().unwrap(), Backend::Hash);
    }

    #[test]
    fn test_backend_serde_accepts_any_case() {
        for tag in ["\"hash\"", "\"Hash\"", "\"HASH\""] {
            assert_eq!(serde_json::from_str::<Backend>(tag).unwrap(), Backend::Hash);
        }
        assert_eq!(serde_json::from_str::<Backend>("\"Rbt\"").unwrap(), Backend::RbTree);
        assert_eq!(serde_json::to_string(&Backend::RbTree).unwrap(), "\"rbt\"");

        let err = serde_json::from_str::<Backend>("\"avl\"").unwrap_err();
        assert!(err.to_string().contains("Invalid data structure 'avl' received."));
    }

    #[test]
    fn test_backend_from_str_unknown() {
        let err = "avl".parse::<Backend>().unwrap_err();
        assert_eq!(err, CoreError::UnknownBackend("avl".to_string()));

        assert!("".parse::<Backend>().is_err());
        assert!(" bst".parse::<Backend>().is_err());
    }

    #[test]
    fn test_backend_names_round_trip() {
        for backend in Backend::ALL {
            assert_eq!(backend.name().parse::<Backend>().unwrap(), backend);
            assert_eq!(backend.to_string(), backend.name());
        }
    }

    #[test]
    fn test_created_store_reports_backend() {
        for backend in Backend::ALL {
            let store = backend.create();
            assert_eq!(store.backend(), backend);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_default_backend_is_hash() {
        assert_eq!(Backend::default(), Backend::Hash);
        assert!(!Backend::Hash.is_ordered());
        assert!(Backend::Bst.is_ordered());
        assert!(Backend::RbTree.is_ordered());
    }

    #[test]
    fn test_all_backends_agree_on_overwrite() {
        for backend in Backend::ALL {
            let mut store = backend.create();
            store.put("cat".to_string(), "dog".to_string());
            store.put("cat".to_string(), "cow".to_string());

            assert_eq!(store.get("cat"), Some("cow"), "backend {backend}");
            assert_eq!(store.len(), 1);
            assert!(store.contains_key("cat"));
            assert!(!store.contains_key("Cat"));
        }
    }

    #[test]
    fn test_debug_format() {
        let mut store = Backend::Bst.create();
        store.put("a".to_string(), "b".to_string());
        let debug_str = format!("{:?}", store.as_ref());
        assert!(debug_str.contains("Bst"));
        assert!(debug_str.contains("len: 1"));
    }
}
