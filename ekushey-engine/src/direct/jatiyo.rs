//! Jatiyo (National) fixed layout.

use super::DirectMap;

/// Build the Jatiyo map.
pub fn build_jatiyo() -> DirectMap {
    let mut t = DirectMap::new();

    // Top row: independent vowels unshifted, long forms shifted
    t.insert('q', "ু");
    t.insert('Q', "ূ");
    t.insert('w', "ে");
    t.insert('W', "ৈ");
    t.insert('e', "এ");
    t.insert('E', "ঐ");
    t.insert('r', "র");
    t.insert('R', "ৃ");
    t.insert('t', "ত");
    t.insert('T', "থ");
    t.insert('y', "য");
    t.insert('Y', "য়");
    t.insert('u', "উ");
    t.insert('U', "ঊ");
    t.insert('i', "ই");
    t.insert('I', "ঈ");
    t.insert('o', "ো");
    t.insert('O', "ও");
    t.insert('p', "প");
    t.insert('P', "ফ");

    // Home row
    t.insert('a', "া");
    t.insert('A', "আ");
    t.insert('s', "স");
    t.insert('S', "ষ");
    t.insert('d', "দ");
    t.insert('D', "ড");
    t.insert('f', "ি");
    t.insert('F', "ী");
    t.insert('g', "গ");
    t.insert('G', "ঘ");
    t.insert('h', "হ");
    t.insert('H', "ঃ");
    t.insert('j', "জ");
    t.insert('J', "ঝ");
    t.insert('k', "ক");
    t.insert('K', "খ");
    t.insert('l', "ল");
    t.insert('L', "ং");

    // Bottom row
    t.insert('z', "্");
    t.insert('Z', "্য");
    t.insert('x', "ট");
    t.insert('X', "ঠ");
    t.insert('c', "চ");
    t.insert('C', "ছ");
    t.insert('v', "ভ");
    t.insert('V', "ঢ");
    t.insert('b', "ব");
    t.insert('B', "ণ");
    t.insert('n', "ন");
    t.insert('N', "ঙ");
    t.insert('m', "ম");
    t.insert('M', "ঁ");

    t
}
