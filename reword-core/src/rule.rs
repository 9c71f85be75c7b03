//! Replacement rules and rule-line parsing

use std::fmt;

/// Delimiter between key and value in a rules file
pub const DEFAULT_DELIMITER: &str = "->";

/// A single `key -> value` substitution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Word to replace
    pub key: String,
    /// Replacement word
    pub value: String,
}

impl Rule {
    /// Create a rule from a key and a value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse one line of a rules file.
    ///
    /// The line is split on `delimiter` and trailing empty segments are
    /// dropped, so `a -> b ->` reads as `a -> b`. What remains must be
    /// exactly two segments, each non-empty after trimming. Anything else
    /// yields `None`.
    pub fn parse(line: &str, delimiter: &str) -> Option<Self> {
        if delimiter.is_empty() {
            return None;
        }

        let mut segments: Vec<&str> = line.split(delimiter).collect();
        while segments.last() == Some(&"") {
            segments.pop();
        }
        let [key, value] = segments.as_slice() else {
            return None;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return None;
        }

        Some(Self::new(key, value))
    }

    /// True when key and value are the same word
    pub fn is_self_loop(&self) -> bool {
        self.key == self.value
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.value)
    }
}
