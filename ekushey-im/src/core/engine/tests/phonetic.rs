use ekushey_engine::Layout;

use super::*;

#[test]
fn test_single_consonant() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k");
    assert_eq!(editor.text(), "ক");
    assert_eq!(editor.caret(), 1);
}

#[test]
fn test_aspirate_replaces_base_consonant() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "kh");
    assert_eq!(editor.text(), "খ");
    assert_eq!(editor.caret(), 1);
}

#[test]
fn test_longest_match_over_three_keystrokes() {
    // k, k, h must end as the single ক্ষ cluster, never a concatenation of
    // the shorter matches shown along the way.
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "kkh");
    assert_eq!(editor.text(), "ক্ষ");
}

#[test]
fn test_word_initial_vowel_vs_midword_sign() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "অ"); // independent form at word start

    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "ma");
    assert_eq!(editor.text(), "মা"); // dependent sign after a consonant
}

#[test]
fn test_word_start_after_space_and_terminator() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "a a");
    assert_eq!(editor.text(), "অ অ");

    // The danda also opens a new word.
    let mut editor = EditableText::from_text("ক।");
    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "ক।অ");
}

#[test]
fn test_vowel_doubling_scenario() {
    // Word-initial a, then a again replacing it with the long form, then a
    // consonant that commits the vowel and starts a fresh unit.
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();

    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "অ");
    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "আ");
    type_str(&mut engine, &mut editor, "m");
    assert_eq!(editor.text(), "আম");
    // A later vowel combines with the fresh consonant only.
    type_str(&mut engine, &mut editor, "ar");
    assert_eq!(editor.text(), "আমার");
}

#[test]
fn test_shift_selects_capital_register() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "t");
    assert_eq!(editor.text(), "ত");
    feed(&mut engine, &mut editor, &press_shift('t'));
    // T is the retroflex; the trailing run "tT" has no 2-key, so it appends
    assert_eq!(editor.text(), "তট");
}

#[test]
fn test_caps_lock_holds_capital_register() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    feed(&mut engine, &mut editor, &press_key(Key::CapsLock));
    type_str(&mut engine, &mut editor, "t");
    type_str(&mut engine, &mut editor, "h");
    // With caps lock, t then h is T then H: ট then the identity fallback H
    assert_eq!(editor.text(), "টH");
}

#[test]
fn test_momentary_shift_affects_one_keystroke() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    feed(&mut engine, &mut editor, &press_key(Key::Shift));
    assert_eq!(engine.shift_state(), ShiftState::Shifted);
    type_str(&mut engine, &mut editor, "t");
    assert_eq!(engine.shift_state(), ShiftState::Off);
    type_str(&mut engine, &mut editor, "t");
    assert_eq!(editor.text(), "টত");
}

#[test]
fn test_reset_marker_escapes_composition() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k`h");
    // The backtick inserts nothing; h starts fresh as হ instead of খ.
    assert_eq!(editor.text(), "কহ");
}

#[test]
fn test_reset_marker_idempotent_on_empty_buffer() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    let result = feed(&mut engine, &mut editor, &press('`'));
    assert!(result.consumed);
    assert!(result.splice.is_none());
    assert_eq!(editor.text(), "");
    assert!(!engine.is_composing());
}

#[test]
fn test_identity_fallback_for_unmapped_letter() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    // J has no Avro mapping of its own
    feed(&mut engine, &mut editor, &press_shift('j'));
    assert_eq!(editor.text(), "J");
}

#[test]
fn test_arabic_phonetic_shares_the_composer() {
    let mut engine = engine_on(Layout::ArabicPhonetic);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "shams");
    assert_eq!(editor.text(), "شامس");
}

#[test]
fn test_auto_vowel_forming_off_uses_general_map_only() {
    let config = EngineConfig {
        auto_vowel_forming: false,
        ..EngineConfig::default()
    };
    let mut engine = KeyboardEngine::with_config(config);
    engine.set_layout(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "া"); // general-map sign even at word start
}
