//! Keyboard engine - the layout/mode state machine and keystroke router.
//!
//! This module contains the main `KeyboardEngine` struct that decides, per
//! keystroke, whether input goes through the phonetic composer or a fixed
//! glyph map, and keeps composition state consistent with the host's text
//! buffer.

mod cursor;
mod input;
mod mode;
mod types;

pub use mode::SwitchDirection;
pub use types::*;

#[cfg(test)]
mod tests;

use std::time::Instant;

use ekushey_engine::direct::{build_arabic, build_jatiyo, build_provhat, build_unibijoy};
use ekushey_engine::phonetic::{build_arabic_phonetic, build_avro};
use ekushey_engine::{DirectMap, EditableText, Layout, PhoneticComposer};
use tracing::trace;

use super::keycode::{Key, KeyEvent};

/// The main keyboard engine.
///
/// One instance serves one focused editable target; switching focus must go
/// through [`KeyboardEngine::reset`] so no composition state leaks between
/// buffers.
pub struct KeyboardEngine {
    /// Engine configuration, fixed at construction
    config: EngineConfig,
    /// Active layout
    layout: Layout,
    /// Active key plane (alpha / symbol / numeric)
    mode: KeyMode,
    /// Shift state (momentary or caps lock)
    shift: ShiftState,
    /// Phonetic composer, present on phonetic layouts
    composer: Option<PhoneticComposer>,
    /// Fixed glyph map, present on direct layouts
    direct: Option<DirectMap>,
    /// Time of the last space keystroke, for the double-space gesture
    last_space: Option<Instant>,
}

impl KeyboardEngine {
    /// Create a new engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with configuration. The initial layout is the first enabled
    /// layout, falling back to English.
    pub fn with_config(config: EngineConfig) -> Self {
        let layout = config
            .enabled_layouts
            .first()
            .copied()
            .unwrap_or(Layout::English);
        let mut engine = Self {
            config,
            layout,
            mode: KeyMode::Alpha,
            shift: ShiftState::Off,
            composer: None,
            direct: None,
            last_space: None,
        };
        engine.activate_layout(layout);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    pub fn shift_state(&self) -> ShiftState {
        self.shift
    }

    /// Whether a phonetic composition run is in progress.
    pub fn is_composing(&self) -> bool {
        self.composer.as_ref().is_some_and(|c| c.is_composing())
    }

    /// Reset per-session state. Called when the engine attaches to a new
    /// editable target; the layout and caps lock survive, composition and
    /// momentary shift do not.
    pub fn reset(&mut self) {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }
        if self.shift == ShiftState::Shifted {
            self.shift = ShiftState::Off;
        }
        self.last_space = None;
    }

    /// (Re)build the per-layout tables. Clears the composer unconditionally:
    /// a partial match in one scheme is never valid in another.
    pub(super) fn activate_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.composer = match layout {
            Layout::Avro => Some(PhoneticComposer::new(build_avro())),
            Layout::ArabicPhonetic => Some(PhoneticComposer::new(build_arabic_phonetic())),
            _ => None,
        };
        self.direct = match layout {
            Layout::Jatiyo => Some(build_jatiyo()),
            Layout::UniBijoy => Some(build_unibijoy()),
            Layout::Provhat => Some(build_provhat()),
            Layout::Arabic => Some(build_arabic()),
            _ => None,
        };
    }

    /// Whether the next printable keystroke takes the shifted register.
    fn shift_active(&self, key: &KeyEvent) -> bool {
        key.modifiers.shift_key
            || key.modifiers.caps_lock
            || matches!(self.shift, ShiftState::Shifted | ShiftState::CapsLock)
    }

    /// Consume the momentary shift after a printable keystroke.
    fn release_momentary_shift(&mut self) {
        if self.shift == ShiftState::Shifted {
            self.shift = ShiftState::Off;
        }
    }

    /// Process a key event against the current text of the focused target.
    ///
    /// The target is read-only here; the caller applies the returned splice
    /// and repositions the caret to `splice.caret_after(selection_start)`.
    pub fn process_key(&mut self, key: &KeyEvent, target: &EditableText) -> EngineResult {
        if !key.is_press {
            return EngineResult::not_consumed();
        }

        trace!(key = %key.key, layout = %self.layout, mode = ?self.mode, "processing key");

        match key.key {
            Key::Shift => self.toggle_shift(),
            Key::CapsLock => self.toggle_caps_lock(),
            Key::Backspace => self.backspace(target),
            Key::Enter => self.insert_break(),
            Key::Space => self.insert_space(target),
            Key::Tab => self.insert_literal('\t'),
            Key::Char(ch) => {
                let shifted = self.shift_active(key);
                let result = self.insert_char(ch, shifted, target);
                self.release_momentary_shift();
                result
            }
        }
    }
}

impl Default for KeyboardEngine {
    fn default() -> Self {
        Self::new()
    }
}
