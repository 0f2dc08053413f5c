//! Arabic phonetic table (chat-alphabet romanization).
//!
//! Emphatic consonants sit on the capital register (S/D/T/Z), digraphs
//! cover the fricatives (th/kh/dh/sh/gh). Arabic has no word-initial vowel
//! alternation, so the word-initial map stays empty and lookup always
//! falls through to the general map.

use super::table::GlyphTable;

/// Build the Arabic phonetic table.
pub fn build_arabic_phonetic() -> GlyphTable {
    let mut t = GlyphTable::new();

    t.insert("a", "ا");
    t.insert("aa", "آ");
    t.insert("ah", "ة");
    t.insert("b", "ب");
    t.insert("t", "ت");
    t.insert("th", "ث");
    t.insert("j", "ج");
    t.insert("g", "ج");
    t.insert("gh", "غ");
    t.insert("H", "ح");
    t.insert("kh", "خ");
    t.insert("k", "ك");
    t.insert("d", "د");
    t.insert("dh", "ذ");
    t.insert("r", "ر");
    t.insert("z", "ز");
    t.insert("s", "س");
    t.insert("sh", "ش");
    t.insert("S", "ص");
    t.insert("D", "ض");
    t.insert("T", "ط");
    t.insert("Z", "ظ");
    t.insert("A", "ع");
    t.insert("f", "ف");
    t.insert("q", "ق");
    t.insert("l", "ل");
    t.insert("m", "م");
    t.insert("n", "ن");
    t.insert("h", "ه");
    t.insert("w", "و");
    t.insert("u", "و");
    t.insert("o", "و");
    t.insert("W", "ؤ");
    t.insert("y", "ي");
    t.insert("i", "ي");
    t.insert("e", "ي");
    t.insert("Y", "ى");

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraphs_beat_single_letters() {
        let t = build_arabic_phonetic();
        let m = t.lookup("kh", false).unwrap();
        assert_eq!(m.key_len, 2);
        assert_eq!(m.output, "خ");
        assert_eq!(t.lookup("k", false).unwrap().output, "ك");
    }

    #[test]
    fn test_emphatic_capitals() {
        let t = build_arabic_phonetic();
        assert_eq!(t.lookup("s", false).unwrap().output, "س");
        assert_eq!(t.lookup("S", false).unwrap().output, "ص");
    }

    #[test]
    fn test_no_word_initial_entries() {
        let t = build_arabic_phonetic();
        assert_eq!(t.word_initial_entries().count(), 0);
        // Word-start lookups behave exactly like mid-word ones.
        assert_eq!(
            t.lookup("a", true).unwrap().output,
            t.lookup("a", false).unwrap().output
        );
    }
}
