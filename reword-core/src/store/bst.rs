//! Unbalanced binary search tree backend

use super::{Backend, ReplacementStore};
use std::cmp::Ordering;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    key: String,
    value: String,
    left: Link,
    right: Link,
}

impl Node {
    fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree ordered by key, with no rebalancing.
///
/// Operations are O(log n) on random insertion orders and degrade to O(n)
/// on sorted input.
#[derive(Debug, Default)]
pub struct BstMap {
    root: Link,
    len: usize,
}

impl BstMap {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }
}

impl ReplacementStore for BstMap {
    fn put(&mut self, key: String, value: String) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match key.as_str().cmp(node.key.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
            };
        }
        *cursor = Some(Box::new(Node::new(key, value)));
        self.len += 1;
    }

    fn get(&self, key: &str) -> Option<&str> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.value.as_str()),
            };
        }
        None
    }

    fn len(&self) -> usize {
        self.len
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cursor = self.root.as_deref();
        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                entries.push((node.key.as_str(), node.value.as_str()));
                cursor = node.right.as_deref();
            }
        }
        entries
    }

    fn backend(&self) -> Backend {
        Backend::Bst
    }
}
