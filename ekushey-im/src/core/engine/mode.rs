//! Layout switching and mode/shift transitions.

use tracing::{debug, warn};

use super::*;

/// Direction for cyclic layout navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    Next,
    Prev,
}

impl KeyboardEngine {
    /// Activate a layout explicitly. Clears composition state even when the
    /// layout is unchanged.
    pub fn set_layout(&mut self, layout: Layout) {
        debug!(from = %self.layout, to = %layout, "layout switch");
        self.activate_layout(layout);
    }

    /// Cycle to the adjacent enabled layout. When the current layout is not
    /// in the enabled list (disabled since activation) navigation falls back
    /// to the first enabled layout; an empty list leaves the layout alone.
    pub fn switch_layout(&mut self, direction: SwitchDirection) -> Layout {
        let enabled = &self.config.enabled_layouts;
        if enabled.is_empty() {
            warn!("enabled layout list is empty, keeping current layout");
            return self.layout;
        }
        let next = match enabled.iter().position(|l| *l == self.layout) {
            None => enabled[0],
            Some(idx) => {
                let len = enabled.len();
                let next_idx = match direction {
                    SwitchDirection::Next => (idx + 1) % len,
                    SwitchDirection::Prev => (idx + len - 1) % len,
                };
                enabled[next_idx]
            }
        };
        self.set_layout(next);
        next
    }

    /// Switch key plane. Entering Symbol or Numeric suspends composition
    /// but deliberately leaves the match buffer alone: the next literal
    /// keystroke clears it, and a user may toggle planes mid-word.
    pub fn set_mode(&mut self, mode: KeyMode) {
        debug!(from = ?self.mode, to = ?mode, "mode switch");
        self.mode = mode;
    }

    /// Momentary shift: affects the next printable keystroke only.
    pub(super) fn toggle_shift(&mut self) -> EngineResult {
        self.shift = match self.shift {
            ShiftState::Off => ShiftState::Shifted,
            ShiftState::Shifted => ShiftState::Off,
            // Caps lock owns the shift plane until released.
            ShiftState::CapsLock => ShiftState::CapsLock,
        };
        EngineResult::consumed()
    }

    /// Caps lock: persistent shift until toggled off.
    pub(super) fn toggle_caps_lock(&mut self) -> EngineResult {
        self.shift = match self.shift {
            ShiftState::CapsLock => ShiftState::Off,
            _ => ShiftState::CapsLock,
        };
        EngineResult::consumed()
    }
}
