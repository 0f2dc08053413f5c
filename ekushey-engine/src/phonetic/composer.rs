//! The stateful longest-match composer driving phonetic input.
//!
//! Consumes one base-script character at a time, keeps a rolling match
//! buffer, and emits a splice describing how the text immediately before
//! the caret must change. Already-inserted output is retroactively replaced
//! when a longer table key becomes available, so the user sees instant
//! feedback while the final text still reflects the longest match.

use tracing::trace;

use crate::splice::Splice;

use super::table::GlyphTable;

/// Phonetic composer for one input session.
///
/// State is limited to the trailing run of raw characters that could still
/// extend into a longer match, plus the length of the most recent glyph
/// insertion. Everything visible in the text is a deterministic function of
/// that run; clearing the composer is always a safe recovery.
#[derive(Debug)]
pub struct PhoneticComposer {
    table: GlyphTable,
    /// Trailing run of normalized raw characters still eligible for matching.
    buffer: String,
    /// Characters inserted by the most recent splice (to delete on a longer match).
    last_output_len: usize,
    /// Raw characters consumed by the last accepted match. Backspace needs
    /// this to tell a 1:1 glyph from a cluster; it is derivable from the
    /// raw run and never affects match results.
    last_match_len: usize,
}

impl PhoneticComposer {
    pub fn new(table: GlyphTable) -> Self {
        Self {
            table,
            buffer: String::new(),
            last_output_len: 0,
            last_match_len: 0,
        }
    }

    /// The active glyph table.
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// The unconsumed raw run.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether a composition run is in progress.
    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Clear all composition state.
    ///
    /// Called on layout switch, non-alphabetic input, the hard-reset key,
    /// and any text mutation that bypassed the engine.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_output_len = 0;
        self.last_match_len = 0;
    }

    /// Process one alphabetic keystroke and return the resulting splice.
    ///
    /// `shift_active` selects the cased form matched against the tables;
    /// `at_word_start` enables the word-initial map for this keystroke.
    pub fn process(&mut self, ch: char, shift_active: bool, at_word_start: bool) -> Splice {
        let normalized = if shift_active {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        };

        let mut candidate = self.buffer.clone();
        candidate.push(normalized);

        match self.table.lookup(&candidate, at_word_start) {
            Some(m) if m.key_len > 1 => {
                // A longer key absorbed previously typed characters: the new
                // glyph sequence replaces the previous insertion.
                let splice = Splice::replace(self.last_output_len, m.output);
                trace!(key_len = m.key_len, output = m.output, "extend match");
                self.last_output_len = m.output.chars().count();
                self.last_match_len = m.key_len;
                self.buffer = candidate;
                splice
            }
            Some(m) => {
                // Only the new character matched on its own: append.
                let splice = Splice::insert(m.output);
                trace!(output = m.output, "fresh unit");
                self.last_output_len = m.output.chars().count();
                self.last_match_len = 1;
                self.buffer = candidate;
                splice
            }
            None => {
                // Identity fallback: the normalized character itself.
                trace!(ch = %normalized, "no match, passthrough");
                self.buffer.clear();
                self.buffer.push(normalized);
                self.last_output_len = 1;
                self.last_match_len = 1;
                Splice::insert(normalized)
            }
        }
    }

    /// Roll composition state back across a one-character backspace.
    ///
    /// When the deleted glyph came from exactly one raw character, the raw
    /// run is truncated by one and the output bookkeeping re-derived from
    /// the remaining run. When the deleted character was part of a composed
    /// cluster (multi-glyph insertion, or a glyph spanning several raw
    /// characters) the state is cleared entirely; the next keystroke starts
    /// fresh rather than matching against an already-edited-out sequence.
    pub fn rollback(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if self.last_output_len != 1 || self.last_match_len != 1 {
            self.reset();
            return;
        }
        self.buffer.pop();
        if self.buffer.is_empty() {
            self.reset();
            return;
        }
        // Re-derive lengths for the unit now trailing in the text. Only the
        // lengths matter here; the general and word-initial maps agree on
        // those for any key present in both.
        let lengths = self
            .table
            .lookup(&self.buffer, false)
            .or_else(|| self.table.lookup(&self.buffer, true))
            .map(|m| (m.output.chars().count(), m.key_len));
        match lengths {
            Some((output_len, match_len)) => {
                self.last_output_len = output_len;
                self.last_match_len = match_len;
            }
            None => self.reset(),
        }
    }
}
