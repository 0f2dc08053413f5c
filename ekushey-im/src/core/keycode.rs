//! Key definitions and key event handling.
//!
//! On-screen keys arrive as the character printed on them plus a handful of
//! function keys; there is no scancode layer underneath.

use std::fmt;

/// A key on the virtual keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key
    Char(char),
    Backspace,
    Enter,
    Space,
    Tab,
    /// Momentary shift
    Shift,
    CapsLock,
}

impl Key {
    /// Map a character onto its key, folding the whitespace characters onto
    /// their function keys.
    pub fn from_char(ch: char) -> Self {
        match ch {
            ' ' => Key::Space,
            '\n' => Key::Enter,
            '\t' => Key::Tab,
            _ => Key::Char(ch),
        }
    }

    /// The character this key inserts, for keys that insert one.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Key::Char(ch) => Some(*ch),
            Key::Space => Some(' '),
            Key::Enter => Some('\n'),
            Key::Tab => Some('\t'),
            _ => None,
        }
    }

    /// Whether this key only changes modifier state.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::CapsLock)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(ch) => write!(f, "{}", ch),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Modifier state accompanying a key event (physical keyboards report
/// these; on-screen keyboards track them in the engine instead).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub caps_lock: bool,
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_caps_lock(mut self, caps_lock: bool) -> Self {
        self.caps_lock = caps_lock;
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.shift_key && !self.caps_lock
    }
}

/// A key event
#[derive(Debug, Clone)]
pub struct KeyEvent {
    /// The key
    pub key: Key,
    /// Modifier state
    pub modifiers: KeyModifiers,
    /// Whether this is a key press (true) or release (false)
    pub is_press: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: KeyModifiers, is_press: bool) -> Self {
        Self {
            key,
            modifiers,
            is_press,
        }
    }

    /// Create a simple key press event without modifiers
    pub fn press(key: Key) -> Self {
        Self::new(key, KeyModifiers::default(), true)
    }

    /// Create a key press for a printable character
    pub fn press_char(ch: char) -> Self {
        Self::press(Key::from_char(ch))
    }

    /// The character this event inserts, if it is a press of an inserting key
    pub fn to_char(&self) -> Option<char> {
        if self.is_press { self.key.to_char() } else { None }
    }
}
