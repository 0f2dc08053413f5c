//! Glyph tables: base-script key sequences mapped to native-script output.

use std::collections::HashMap;

/// Longest key length in any table. Lookup probes trailing substrings of
/// this length down to 1.
pub const MAX_KEY_LEN: usize = 3;

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMatch<'a> {
    /// Number of raw characters the key consumed (1..=3).
    pub key_len: usize,
    /// The mapped native-script output.
    pub output: &'a str,
}

/// A phonetic glyph table: a general map that applies anywhere in a word,
/// plus a word-initial map consulted only at word start.
///
/// Keys are 1 to 3 base-script characters and are case-sensitive; distinct
/// upper- and lowercase keys encode different glyphs.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    general: HashMap<String, String>,
    word_initial: HashMap<String, String>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule into the general map.
    pub fn insert(&mut self, key: &str, output: &str) {
        debug_assert!((1..=MAX_KEY_LEN).contains(&key.chars().count()));
        self.general.insert(key.to_string(), output.to_string());
    }

    /// Insert a rule into the word-initial map.
    pub fn insert_initial(&mut self, key: &str, output: &str) {
        debug_assert!((1..=MAX_KEY_LEN).contains(&key.chars().count()));
        self.word_initial
            .insert(key.to_string(), output.to_string());
    }

    /// Look up the longest key matching a trailing substring of `candidate`.
    ///
    /// Lengths are probed from `min(candidate.len(), 3)` down to 1. At each
    /// length the word-initial map is tried first when `at_word_start`, then
    /// the general map; the first hit wins, so a longer general key beats a
    /// shorter word-initial one.
    pub fn lookup(&self, candidate: &str, at_word_start: bool) -> Option<TableMatch<'_>> {
        let chars: Vec<char> = candidate.chars().collect();
        let max = chars.len().min(MAX_KEY_LEN);
        for len in (1..=max).rev() {
            let tail: String = chars[chars.len() - len..].iter().collect();
            if at_word_start
                && let Some(output) = self.word_initial.get(&tail)
            {
                return Some(TableMatch {
                    key_len: len,
                    output: output.as_str(),
                });
            }
            if let Some(output) = self.general.get(&tail) {
                return Some(TableMatch {
                    key_len: len,
                    output: output.as_str(),
                });
            }
        }
        None
    }

    /// Iterate the general map (key, output) pairs.
    pub fn general_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.general.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate the word-initial map (key, output) pairs.
    pub fn word_initial_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.word_initial
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
