//! Whole-word substitution over text
//!
//! A line is scanned left to right. Maximal runs of alphabetic characters
//! are words; each word is looked up once and replaced by its direct value
//! (chains are not followed here). Every other character, digits included,
//! is copied through unchanged and ends the current word.

use crate::store::ReplacementStore;

/// Check if `ch` belongs to a word
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Counters collected while transducing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransducerStats {
    /// Lines emitted
    pub lines: usize,
    /// Words looked up
    pub words: usize,
    /// Words that had a replacement
    pub replacements: usize,
}

/// Applies a finished replacement store to text
pub struct Transducer<'a> {
    store: &'a dyn ReplacementStore,
    stats: TransducerStats,
}

impl<'a> Transducer<'a> {
    /// Create a transducer reading from `store`
    pub fn new(store: &'a dyn ReplacementStore) -> Self {
        Self {
            store,
            stats: TransducerStats::default(),
        }
    }

    /// Rewrite every line of `text`.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Each output line ends
    /// with `\n`, including the last one, whether or not `text` ended with a
    /// terminator.
    pub fn apply(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 1);
        for line in lines(text) {
            self.apply_line(line, &mut out);
        }
        out
    }

    /// Rewrite a single line (without its terminator) into `out`, followed
    /// by `\n`
    pub fn apply_line(&mut self, line: &str, out: &mut String) {
        let mut word_start: Option<usize> = None;

        for (index, ch) in line.char_indices() {
            if is_word_char(ch) {
                word_start.get_or_insert(index);
                continue;
            }
            if let Some(start) = word_start.take() {
                self.emit_word(&line[start..index], out);
            }
            out.push(ch);
        }

        if let Some(start) = word_start {
            self.emit_word(&line[start..], out);
        }

        out.push('\n');
        self.stats.lines += 1;
    }

    fn emit_word(&mut self, word: &str, out: &mut String) {
        self.stats.words += 1;
        match self.store.get(word) {
            Some(replacement) => {
                self.stats.replacements += 1;
                out.push_str(replacement);
            }
            None => out.push_str(word),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> TransducerStats {
        self.stats
    }
}

/// Split `text` at `\n`, `\r\n` and lone `\r`. A final terminator does not
/// start another line.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest;
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &rest[end + skip..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}
