//! Tests for the keyboard engine

use super::*;
use crate::core::keycode::KeyModifiers;
use ekushey_engine::EditableText;

mod bypass;
mod phonetic;

fn press(ch: char) -> KeyEvent {
    KeyEvent::press_char(ch)
}

fn press_key(key: Key) -> KeyEvent {
    KeyEvent::press(key)
}

fn press_shift(ch: char) -> KeyEvent {
    KeyEvent::new(Key::from_char(ch), KeyModifiers::new().with_shift(true), true)
}

/// Apply one key the way a host does: process, then splice the result in.
fn feed(engine: &mut KeyboardEngine, editor: &mut EditableText, key: &KeyEvent) -> EngineResult {
    let result = engine.process_key(key, editor);
    if let Some(splice) = &result.splice {
        editor.apply_splice(splice);
    }
    result
}

/// Type a string; uppercase letters go in as shifted keystrokes.
fn type_str(engine: &mut KeyboardEngine, editor: &mut EditableText, text: &str) {
    for ch in text.chars() {
        let key = if ch.is_ascii_uppercase() {
            press_shift(ch)
        } else {
            press(ch)
        };
        feed(engine, editor, &key);
    }
}

fn engine_on(layout: ekushey_engine::Layout) -> KeyboardEngine {
    let mut engine = KeyboardEngine::new();
    engine.set_layout(layout);
    engine
}
