//! Separate-chaining hash table backend

use super::{Backend, ReplacementStore};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

const INITIAL_BUCKETS: usize = 16;

// Resize once len / buckets exceeds 3 / 4.
const LOAD_NUMERATOR: usize = 3;
const LOAD_DENOMINATOR: usize = 4;

type Bucket = Vec<(String, String)>;

fn bucket_index(key: &str, buckets: usize) -> usize {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    (hasher.finish() % buckets as u64) as usize
}

/// Hash table with one vector of entries per bucket.
///
/// Expected O(1) put and get; iteration order follows bucket layout and
/// changes on resize.
#[derive(Debug)]
pub struct ChainedHashMap {
    buckets: Vec<Bucket>,
    len: usize,
}

impl Default for ChainedHashMap {
    fn default() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }
}

impl ChainedHashMap {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with at least `buckets` buckets
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
            len: 0,
        }
    }

    /// Current number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn over_loaded(&self) -> bool {
        self.len * LOAD_DENOMINATOR > self.buckets.len() * LOAD_NUMERATOR
    }

    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, vec![Vec::new(); new_count]);
        for (key, value) in old.into_iter().flatten() {
            let index = bucket_index(&key, new_count);
            self.buckets[index].push((key, value));
        }
    }
}

impl ReplacementStore for ChainedHashMap {
    fn put(&mut self, key: String, value: String) {
        let index = bucket_index(&key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }

        bucket.push((key, value));
        self.len += 1;
        if self.over_loaded() {
            self.grow();
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.buckets
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn backend(&self) -> Backend {
        Backend::Hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut table = ChainedHashMap::new();
        table.put("cat".into(), "dog".into());
        table.put("sun".into(), "moon".into());

        assert_eq!(table.get("cat"), Some("dog"));
        assert_eq!(table.get("sun"), Some("moon"));
        assert_eq!(table.get("dog"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut table = ChainedHashMap::new();
        table.put("k".into(), "1".into());
        table.put("k".into(), "2".into());

        assert_eq!(table.get("k"), Some("2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_grows_past_load_factor() {
        let mut table = ChainedHashMap::new();
        assert_eq!(table.bucket_count(), INITIAL_BUCKETS);

        for i in 0..13 {
            table.put(format!("word{i}"), format!("{i}"));
        }
        assert_eq!(table.bucket_count(), INITIAL_BUCKETS * 2);

        for i in 0..13 {
            assert_eq!(table.get(&format!("word{i}")), Some(format!("{i}").as_str()));
        }
    }

    #[test]
    fn test_single_bucket_collisions() {
        let mut table = ChainedHashMap::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);

        table.put("a".into(), "1".into());
        table.put("b".into(), "2".into());
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_entries_cover_all_keys() {
        let mut table = ChainedHashMap::new();
        for i in 0..100 {
            table.put(format!("k{i}"), format!("v{i}"));
        }

        let mut entries = table.entries();
        entries.sort_unstable();
        assert_eq!(entries.len(), 100);
        assert!(entries.contains(&("k42", "v42")));
    }
}
