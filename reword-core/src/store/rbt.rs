//! Left-leaning red-black tree backend
//!
//! Insert-only variant of the 2-3 tree encoding: red links lean left, no
//! node has two red links, and every root-to-leaf path crosses the same
//! number of black links. Height stays below `2 * log2(n + 1)`.

use super::{Backend, ReplacementStore};
use std::cmp::Ordering;

type Link = Option<Box<Node>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug)]
struct Node {
    key: String,
    value: String,
    color: Color,
    left: Link,
    right: Link,
}

impl Node {
    fn red(key: String, value: String) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }
}

fn is_red(link: &Link) -> bool {
    matches!(link, Some(node) if node.color == Color::Red)
}

fn rotate_left(mut h: Box<Node>) -> Box<Node> {
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.left = Some(h);
    x
}

fn rotate_right(mut h: Box<Node>) -> Box<Node> {
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.right = Some(h);
    x
}

fn flip_colors(h: &mut Node) {
    h.color = Color::Red;
    for child in [h.left.as_deref_mut(), h.right.as_deref_mut()]
        .into_iter()
        .flatten()
    {
        child.color = Color::Black;
    }
}

/// Insert below `link`, returning the new subtree root and whether a new
/// key was added.
fn insert(link: Link, key: String, value: String) -> (Box<Node>, bool) {
    let Some(mut h) = link else {
        return (Box::new(Node::red(key, value)), true);
    };

    let added = match key.cmp(&h.key) {
        Ordering::Less => {
            let (child, added) = insert(h.left.take(), key, value);
            h.left = Some(child);
            added
        }
        Ordering::Greater => {
            let (child, added) = insert(h.right.take(), key, value);
            h.right = Some(child);
            added
        }
        Ordering::Equal => {
            h.value = value;
            false
        }
    };

    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && h.left.as_ref().is_some_and(|left| is_red(&left.left)) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }

    (h, added)
}

/// Self-balancing ordered map with guaranteed O(log n) operations
#[derive(Debug, Default)]
pub struct RbTreeMap {
    root: Link,
    len: usize,
}

impl RbTreeMap {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        fn depth(link: &Link) -> usize {
            match link {
                Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
                None => 0,
            }
        }
        depth(&self.root)
    }

    #[cfg(test)]
    fn black_height(link: &Link) -> Option<usize> {
        match link {
            None => Some(0),
            Some(node) => {
                if is_red(&node.right) {
                    return None;
                }
                if node.color == Color::Red && is_red(&node.left) {
                    return None;
                }
                let left = Self::black_height(&node.left)?;
                let right = Self::black_height(&node.right)?;
                if left != right {
                    return None;
                }
                Some(left + usize::from(node.color == Color::Black))
            }
        }
    }
}

impl ReplacementStore for RbTreeMap {
    fn put(&mut self, key: String, value: String) {
        let (mut root, added) = insert(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if added {
            self.len += 1;
        }
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
        fn walk<'a>(link: &'a Link, out: &mut Vec<(&'a str, &'a str)>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push((node.key.as_str(), node.value.as_str()));
                walk(&node.right, out);
            }
        }

        let mut entries = Vec::with_capacity(self.len);
        walk(&self.root, &mut entries);
        entries
    }

    fn backend(&self) -> Backend {
        Backend::RbTree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_balanced(tree: &RbTreeMap) {
        assert!(!is_red(&tree.root), "root must be black");
        assert!(
            RbTreeMap::black_height(&tree.root).is_some(),
            "red-black invariants violated"
        );
    }

    #[test]
    fn test_put_and_get() {
        let mut tree = RbTreeMap::new();
        tree.put("cat".into(), "dog".into());
        tree.put("dog".into(), "fish".into());

        assert_eq!(tree.get("cat"), Some("dog"));
        assert_eq!(tree.get("dog"), Some("fish"));
        assert_eq!(tree.get("fish"), None);
        assert_eq!(tree.len(), 2);
        assert_balanced(&tree);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut tree = RbTreeMap::new();
        tree.put("a".into(), "1".into());
        tree.put("b".into(), "2".into());
        tree.put("a".into(), "3".into());

        assert_eq!(tree.get("a"), Some("3"));
        assert_eq!(tree.len(), 2);
        assert_balanced(&tree);
    }

    #[test]
    fn test_sorted_input_stays_balanced() {
        let mut tree = RbTreeMap::new();
        let n = 1024;
        for i in 0..n {
            tree.put(format!("k{i:05}"), format!("v{i}"));
            assert_balanced(&tree);
        }

        // 2 * log2(1025) is just over 20
        assert!(tree.height() <= 20, "height {} too large", tree.height());
        assert_eq!(tree.len(), n);
        assert_eq!(tree.get("k00512"), Some("v512"));
    }

    #[test]
    fn test_reverse_input_stays_balanced() {
        let mut tree = RbTreeMap::new();
        for i in (0..500).rev() {
            tree.put(format!("w{i:04}"), "x".into());
        }
        assert_balanced(&tree);
        assert!(tree.height() <= 18);
    }

    #[test]
    fn test_entries_are_sorted() {
        let mut tree = RbTreeMap::new();
        for word in ["delta", "alpha", "echo", "charlie", "bravo"] {
            tree.put(word.into(), "v".into());
        }

        let keys: Vec<&str> = tree.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_rotation_without_child_is_noop() {
        let node = Box::new(Node::red("a".into(), "b".into()));
        let node = rotate_left(node);
        let node = rotate_right(node);
        assert_eq!(node.key, "a");
        assert!(node.left.is_none() && node.right.is_none());
    }
}
