//! Arabic fixed layout (standard 101 arrangement).
//!
//! The shift plane is left empty; shifted keys fall back to the base glyph.

use super::DirectMap;

/// Build the Arabic 101 map.
pub fn build_arabic() -> DirectMap {
    let mut t = DirectMap::new();

    // Top row
    t.insert('q', "ض");
    t.insert('w', "ص");
    t.insert('e', "ث");
    t.insert('r', "ق");
    t.insert('t', "ف");
    t.insert('y', "غ");
    t.insert('u', "ع");
    t.insert('i', "ه");
    t.insert('o', "خ");
    t.insert('p', "ح");

    // Home row
    t.insert('a', "ش");
    t.insert('s', "س");
    t.insert('d', "ي");
    t.insert('f', "ب");
    t.insert('g', "ل");
    t.insert('h', "ا");
    t.insert('j', "ت");
    t.insert('k', "ن");
    t.insert('l', "م");

    // Bottom row
    t.insert('z', "ئ");
    t.insert('x', "ء");
    t.insert('c', "ؤ");
    t.insert('v', "ر");
    t.insert('b', "لا");
    t.insert('n', "ى");
    t.insert('m', "ة");

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_row() {
        let t = build_arabic();
        assert_eq!(t.lookup('h', false), Some("ا"));
        assert_eq!(t.lookup('s', false), Some("س"));
    }

    #[test]
    fn test_lam_alef_ligature() {
        let t = build_arabic();
        assert_eq!(t.lookup('b', false), Some("لا"));
    }
}
