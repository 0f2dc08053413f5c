use ekushey_engine::Layout;

use super::*;

#[test]
fn test_digit_commits_composition() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k5h");
    // The digit is localized, inserted verbatim by the tables' standards,
    // and h starts fresh instead of extending k into খ.
    assert_eq!(editor.text(), "ক৫হ");
}

#[test]
fn test_punctuation_commits_composition() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k,h");
    assert_eq!(editor.text(), "ক,হ");
}

#[test]
fn test_space_commits_composition() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k h");
    assert_eq!(editor.text(), "ক হ");
}

#[test]
fn test_no_retroactive_replacement_after_bypass() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "aa");
    assert_eq!(editor.text(), "আ");
    type_str(&mut engine, &mut editor, ",");
    // The comma committed the vowel; further vowels cannot rewrite it.
    type_str(&mut engine, &mut editor, "a");
    assert_eq!(editor.text(), "আ,া");
}

#[test]
fn test_localized_digits_disabled() {
    let config = EngineConfig {
        localized_digits: false,
        ..EngineConfig::default()
    };
    let mut engine = KeyboardEngine::with_config(config);
    engine.set_layout(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "5");
    assert_eq!(editor.text(), "5");
}

#[test]
fn test_numeric_mode_localizes_digits() {
    let mut engine = engine_on(Layout::ArabicPhonetic);
    engine.set_mode(KeyMode::Numeric);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "10");
    assert_eq!(editor.text(), "١٠");
}

#[test]
fn test_symbol_mode_suspends_transliteration() {
    let mut engine = engine_on(Layout::Avro);
    engine.set_mode(KeyMode::Symbol);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k");
    assert_eq!(editor.text(), "k");
}

#[test]
fn test_returning_to_alpha_keeps_match_buffer() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k");
    engine.set_mode(KeyMode::Symbol);
    engine.set_mode(KeyMode::Alpha);
    // Nothing was typed off-plane, so the composition continues.
    type_str(&mut engine, &mut editor, "h");
    assert_eq!(editor.text(), "খ");
}

#[test]
fn test_typing_off_plane_clears_buffer() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k");
    engine.set_mode(KeyMode::Symbol);
    type_str(&mut engine, &mut editor, "-");
    engine.set_mode(KeyMode::Alpha);
    type_str(&mut engine, &mut editor, "h");
    assert_eq!(editor.text(), "ক-হ");
}

#[test]
fn test_external_insert_is_not_transliterated() {
    let mut engine = engine_on(Layout::Avro);
    let mut editor = EditableText::new();
    type_str(&mut engine, &mut editor, "k");
    // Pasted/AI-sourced text goes through the editor, not the composer.
    editor.insert_external("hello");
    engine.notify_external_edit();
    type_str(&mut engine, &mut editor, "h");
    assert_eq!(editor.text(), "কhelloহ");
    assert_eq!(editor.caret(), 7);
}
