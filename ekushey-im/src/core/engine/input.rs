//! Character input handling: phonetic, direct, and literal paths.

use std::time::Instant;

use ekushey_engine::Splice;
use ekushey_engine::phonetic::{InputClass, classify};

use super::*;

impl KeyboardEngine {
    /// Route a printable character to the path the active layout and mode
    /// require.
    pub(super) fn insert_char(
        &mut self,
        ch: char,
        shifted: bool,
        target: &EditableText,
    ) -> EngineResult {
        // Symbol and numeric planes suspend transliteration entirely.
        if self.mode != KeyMode::Alpha {
            return self.insert_literal(ch);
        }
        // Number-row digits on the alpha plane are literals too.
        if ch.is_ascii_digit() {
            return self.insert_literal(ch);
        }

        if self.layout.is_phonetic() {
            self.insert_phonetic(ch, shifted, target)
        } else if self.layout.is_direct() {
            self.insert_direct(ch, shifted)
        } else {
            self.insert_english(ch, shifted, target)
        }
    }

    /// Phonetic path: classify the character, then compose, reset, or
    /// fall through to a literal insertion.
    fn insert_phonetic(&mut self, ch: char, shifted: bool, target: &EditableText) -> EngineResult {
        let Some(composer) = &mut self.composer else {
            return self.insert_literal(ch);
        };
        match classify(ch) {
            InputClass::ResetMarker => {
                // Escape hatch out of a partial composition; inserts nothing.
                composer.reset();
                EngineResult::consumed()
            }
            InputClass::Literal => self.insert_literal(ch),
            InputClass::Alphabetic => {
                let at_word_start = self.config.auto_vowel_forming
                    && self.layout.is_word_start(target.preceding_char());
                let splice = composer.process(ch, shifted, at_word_start);
                EngineResult::consumed().with_splice(splice)
            }
        }
    }

    /// Direct path: one keystroke, one glyph. Unmapped keys fall back to
    /// the case-folded character itself.
    fn insert_direct(&mut self, ch: char, shifted: bool) -> EngineResult {
        let glyph = self
            .direct
            .as_ref()
            .and_then(|map| map.lookup(ch, shifted))
            .map(str::to_string)
            .unwrap_or_else(|| {
                let folded = if shifted { ch.to_ascii_uppercase() } else { ch };
                folded.to_string()
            });
        EngineResult::consumed().with_splice(Splice::insert(glyph))
    }

    /// English path: case folding plus optional sentence auto-capitalization.
    fn insert_english(&mut self, ch: char, shifted: bool, target: &EditableText) -> EngineResult {
        let upper = shifted
            || (self.config.auto_capitalization
                && ch.is_ascii_alphabetic()
                && self.at_sentence_start(target));
        let folded = if upper {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        };
        EngineResult::consumed().with_splice(Splice::insert(folded))
    }

    /// Insert a character verbatim, outside composition. Clears the match
    /// buffer so no later keystroke can retroactively rewrite across it.
    pub(super) fn insert_literal(&mut self, ch: char) -> EngineResult {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }
        let ch = if self.config.localized_digits {
            self.layout.numeral_script().localize(ch)
        } else {
            ch
        };
        EngineResult::consumed().with_splice(Splice::insert(ch))
    }

    /// Space commits the current composition. A second space inside the
    /// double-space window converts "word  " into "word<terminator> ".
    pub(super) fn insert_space(&mut self, target: &EditableText) -> EngineResult {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }

        let now = Instant::now();
        if self.double_space_fired(now, target) {
            self.last_space = None;
            let terminator = self.layout.sentence_terminator();
            return EngineResult::consumed()
                .with_splice(Splice::replace(1, format!("{terminator} ")));
        }

        self.last_space = Some(now);
        EngineResult::consumed().with_splice(Splice::insert(" "))
    }

    fn double_space_fired(&self, now: Instant, target: &EditableText) -> bool {
        if !self.config.double_space_period || self.mode != KeyMode::Alpha {
            return false;
        }
        let Some(last) = self.last_space else {
            return false;
        };
        if now.duration_since(last).as_millis() as u64 > self.config.double_space_window_ms {
            return false;
        }
        // Needs "x " before the caret where x is a word character.
        if target.has_selection() || target.preceding_char() != Some(' ') {
            return false;
        }
        let caret = target.caret();
        caret >= 2
            && target.char_at(caret - 2).is_some_and(|c| {
                !c.is_whitespace() && c != self.layout.sentence_terminator()
            })
    }

    /// Enter commits the composition and inserts a line break.
    pub(super) fn insert_break(&mut self) -> EngineResult {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }
        self.last_space = None;
        EngineResult::consumed().with_splice(Splice::insert("\n"))
    }

    /// Whether the caret sits at the start of a sentence: only whitespace
    /// between it and the field start or the last sentence terminator.
    fn at_sentence_start(&self, target: &EditableText) -> bool {
        let terminator = self.layout.sentence_terminator();
        let mut pos = target.caret();
        while pos > 0 {
            let Some(c) = target.char_at(pos - 1) else {
                return true;
            };
            if c == ' ' || c == '\n' {
                pos -= 1;
                continue;
            }
            return c == terminator || c == '?' || c == '!';
        }
        true
    }
}
