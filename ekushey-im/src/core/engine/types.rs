//! Type definitions for the keyboard engine.

use ekushey_engine::{Layout, Splice};

/// Result of processing a key event.
///
/// `splice` describes how the host must mutate the text immediately before
/// the caret; the new caret offset is `splice.caret_after(selection_start)`.
#[derive(Debug, Clone, Default)]
pub struct EngineResult {
    /// Whether the key was consumed by the engine
    pub consumed: bool,
    /// Text edit to apply, if any
    pub splice: Option<Splice>,
}

impl EngineResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            splice: None,
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            splice: None,
        }
    }

    pub fn with_splice(mut self, splice: Splice) -> Self {
        self.splice = Some(splice);
        self
    }
}

/// Key mode: which plane of the keyboard is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Letters; phonetic composition is live here
    #[default]
    Alpha,
    /// Punctuation and symbols; composition suspended
    Symbol,
    /// Digits; composition suspended
    Numeric,
}

/// Shift state: momentary shift affects one keystroke, caps lock persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftState {
    #[default]
    Off,
    Shifted,
    CapsLock,
}

/// Configuration for the keyboard engine.
///
/// Immutable for the lifetime of an engine instance; per-keystroke behavior
/// reads from here rather than from any ambient state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Layouts the cyclic switcher walks through
    pub enabled_layouts: Vec<Layout>,
    /// Upper-case the first letter of a sentence (English layout)
    pub auto_capitalization: bool,
    /// Consult the word-initial vowel map at word start
    pub auto_vowel_forming: bool,
    /// Replace a quick double space with the sentence terminator
    pub double_space_period: bool,
    /// Window for the double-space gesture, in milliseconds
    pub double_space_window_ms: u64,
    /// Render digits in the active layout's numeral script
    pub localized_digits: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled_layouts: vec![Layout::English, Layout::Avro, Layout::Jatiyo],
            auto_capitalization: true,
            auto_vowel_forming: true,
            double_space_period: true,
            double_space_window_ms: 500,
            localized_digits: true,
        }
    }
}
