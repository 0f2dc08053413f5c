//! Avro-style Bengali phonetic table.
//!
//! Keys are case-sensitive: the capital register carries the retroflex
//! series (T/D/N), the sibilant split (S/Sh), and independent vowel forms.
//! Every multi-character key has its prefixes mapped as well, so stepwise
//! typing always rewrites the whole trailing unit instead of stranding a
//! partial glyph.

use super::table::GlyphTable;

/// Build the Bengali Avro phonetic table.
pub fn build_avro() -> GlyphTable {
    let mut t = GlyphTable::new();

    // Velar row
    t.insert("k", "ক");
    t.insert("kh", "খ");
    t.insert("kk", "ক্ক");
    t.insert("kkh", "ক্ষ");
    t.insert("q", "ক");
    t.insert("g", "গ");
    t.insert("gh", "ঘ");
    t.insert("Ng", "ঙ");

    // Palatal row
    t.insert("c", "চ");
    t.insert("ch", "ছ");
    t.insert("j", "জ");
    t.insert("jh", "ঝ");
    t.insert("NG", "ঞ");

    // Retroflex row (capital register)
    t.insert("T", "ট");
    t.insert("Th", "ঠ");
    t.insert("D", "ড");
    t.insert("Dh", "ঢ");
    t.insert("N", "ণ");

    // Dental row
    t.insert("t", "ত");
    t.insert("th", "থ");
    t.insert("d", "দ");
    t.insert("dh", "ধ");
    t.insert("n", "ন");

    // Labial row
    t.insert("p", "প");
    t.insert("ph", "ফ");
    t.insert("f", "ফ");
    t.insert("b", "ব");
    t.insert("bh", "ভ");
    t.insert("v", "ভ");
    t.insert("m", "ম");

    // Semivowels, liquids, sibilants
    t.insert("z", "য");
    t.insert("r", "র");
    t.insert("rr", "র্র");
    t.insert("rri", "ৃ");
    t.insert("l", "ল");
    t.insert("s", "স");
    t.insert("sh", "শ");
    t.insert("S", "শ");
    t.insert("Sh", "ষ");
    t.insert("h", "হ");

    // Bengali-specific consonants
    t.insert("R", "ড়");
    t.insert("Rh", "ঢ়");
    t.insert("y", "য়");
    t.insert("Y", "্য");
    t.insert("w", "্ব");
    t.insert("x", "ক্স");
    t.insert("ng", "ং");

    // Vowels, mid-word register: dependent signs on the lowercase single
    // keys, independent forms on the doubled and capital keys.
    t.insert("a", "া");
    t.insert("aa", "আ");
    t.insert("A", "্যা");
    t.insert("i", "ি");
    t.insert("ii", "ঈ");
    t.insert("I", "ী");
    t.insert("u", "ু");
    t.insert("uu", "ঊ");
    t.insert("U", "ূ");
    t.insert("oo", "ু");
    t.insert("e", "ে");
    t.insert("E", "এ");
    t.insert("o", "ো");
    t.insert("O", "ও");
    t.insert("oi", "ৈ");
    t.insert("OI", "ঐ");
    t.insert("ou", "ৌ");
    t.insert("OU", "ঔ");

    // Word-initial register: a vowel sound beginning a word takes its
    // independent form.
    t.insert_initial("a", "অ");
    t.insert_initial("aa", "আ");
    t.insert_initial("A", "অ্যা");
    t.insert_initial("i", "ই");
    t.insert_initial("ii", "ঈ");
    t.insert_initial("I", "ঈ");
    t.insert_initial("u", "উ");
    t.insert_initial("uu", "ঊ");
    t.insert_initial("U", "ঊ");
    t.insert_initial("e", "এ");
    t.insert_initial("E", "এ");
    t.insert_initial("o", "ও");
    t.insert_initial("O", "ও");
    t.insert_initial("oi", "ঐ");
    t.insert_initial("OI", "ঐ");
    t.insert_initial("ou", "ঔ");
    t.insert_initial("OU", "ঔ");
    t.insert_initial("w", "ও");

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retroflex_dental_split() {
        let t = build_avro();
        assert_eq!(t.lookup("t", false).unwrap().output, "ত");
        assert_eq!(t.lookup("T", false).unwrap().output, "ট");
        assert_eq!(t.lookup("Th", false).unwrap().output, "ঠ");
        assert_eq!(t.lookup("th", false).unwrap().output, "থ");
    }

    #[test]
    fn test_vowel_registers() {
        let t = build_avro();
        assert_eq!(t.lookup("a", true).unwrap().output, "অ");
        assert_eq!(t.lookup("a", false).unwrap().output, "া");
        assert_eq!(t.lookup("aa", false).unwrap().output, "আ");
    }

    #[test]
    fn test_multi_char_keys_are_prefix_closed() {
        // Stepwise typing relies on every prefix of a longer key matching
        // something, so each keystroke rewrites the whole trailing unit.
        let t = build_avro();
        for (key, _) in t.general_entries() {
            let chars: Vec<char> = key.chars().collect();
            for end in 1..chars.len() {
                let prefix: String = chars[..end].iter().collect();
                assert!(
                    t.lookup(&prefix, false).map(|m| m.key_len) == Some(end),
                    "prefix {prefix:?} of key {key:?} is not mapped"
                );
            }
        }
    }
}
