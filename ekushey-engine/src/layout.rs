//! Layout identifiers and per-script metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::numeral::NumeralScript;

/// A keyboard layout known to the engine.
///
/// Phonetic layouts route keystrokes through the `PhoneticComposer`;
/// the fixed layouts are stateless one-key-one-glyph lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Plain Latin passthrough
    English,
    /// Arabic fixed layout (standard 101 arrangement)
    Arabic,
    /// Arabic phonetic (chat-alphabet romanization)
    #[serde(rename = "arabic-phonetic")]
    ArabicPhonetic,
    /// Bengali Avro-style phonetic
    Avro,
    /// Bengali National (Jatiyo) fixed layout
    Jatiyo,
    /// Bengali Unicode Bijoy fixed layout
    UniBijoy,
    /// Bengali Provhat fixed layout
    Provhat,
}

/// Error returned when parsing an unknown layout name.
#[derive(Debug, thiserror::Error)]
#[error("unknown layout: {0}")]
pub struct LayoutParseError(String);

impl Layout {
    /// All layouts, in the order the layout switcher presents them.
    pub const ALL: [Layout; 7] = [
        Layout::English,
        Layout::Avro,
        Layout::Jatiyo,
        Layout::UniBijoy,
        Layout::Provhat,
        Layout::Arabic,
        Layout::ArabicPhonetic,
    ];

    /// Stable identifier used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Layout::English => "english",
            Layout::Arabic => "arabic",
            Layout::ArabicPhonetic => "arabic-phonetic",
            Layout::Avro => "avro",
            Layout::Jatiyo => "jatiyo",
            Layout::UniBijoy => "unibijoy",
            Layout::Provhat => "provhat",
        }
    }

    /// Whether keystrokes on this layout go through the phonetic composer.
    pub fn is_phonetic(&self) -> bool {
        matches!(self, Layout::Avro | Layout::ArabicPhonetic)
    }

    /// Whether this layout uses a fixed one-key-one-glyph map.
    pub fn is_direct(&self) -> bool {
        matches!(
            self,
            Layout::Arabic | Layout::Jatiyo | Layout::UniBijoy | Layout::Provhat
        )
    }

    /// The sentence-terminating glyph of the layout's script.
    ///
    /// Participates in word-start detection, double-space period, and
    /// auto-capitalization context.
    pub fn sentence_terminator(&self) -> char {
        match self {
            Layout::Avro | Layout::Jatiyo | Layout::UniBijoy | Layout::Provhat => '\u{0964}', // ।
            _ => '.',
        }
    }

    /// The numeral script used when localized digits are enabled.
    pub fn numeral_script(&self) -> NumeralScript {
        match self {
            Layout::Avro | Layout::Jatiyo | Layout::UniBijoy | Layout::Provhat => {
                NumeralScript::Bengali
            }
            Layout::Arabic | Layout::ArabicPhonetic => NumeralScript::ArabicIndic,
            Layout::English => NumeralScript::Latin,
        }
    }

    /// Whether a position is at the start of a word for this layout's script.
    ///
    /// Word start means: no preceding character, or the preceding character
    /// is a space, a newline, or the script's sentence terminator.
    pub fn is_word_start(&self, preceding: Option<char>) -> bool {
        match preceding {
            None => true,
            Some(c) => c == ' ' || c == '\n' || c == self.sentence_terminator(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Layout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .iter()
            .copied()
            .find(|l| l.id() == s)
            .ok_or_else(|| LayoutParseError(s.to_string()))
    }
}
