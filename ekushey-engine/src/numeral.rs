//! Localized numeral glyphs.

use serde::{Deserialize, Serialize};

/// The digit script a layout renders when localized digits are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralScript {
    /// ASCII 0-9
    Latin,
    /// Bengali ০-৯
    Bengali,
    /// Arabic-Indic ٠-٩
    #[serde(rename = "arabic-indic")]
    ArabicIndic,
}

impl NumeralScript {
    /// Map an ASCII digit to this script's numeral. Non-digits pass through.
    pub fn localize(&self, ch: char) -> char {
        let Some(value) = ch.to_digit(10) else {
            return ch;
        };
        let base = match self {
            NumeralScript::Latin => return ch,
            NumeralScript::Bengali => 0x09e6,   // ০
            NumeralScript::ArabicIndic => 0x0660, // ٠
        };
        char::from_u32(base + value).unwrap_or(ch)
    }

    /// Localize every digit in a string.
    pub fn localize_str(&self, text: &str) -> String {
        text.chars().map(|c| self.localize(c)).collect()
    }
}
