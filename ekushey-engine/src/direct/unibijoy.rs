//! UniBijoy fixed layout (Bijoy key conventions, Unicode output).

use super::DirectMap;

/// Build the UniBijoy map.
pub fn build_unibijoy() -> DirectMap {
    let mut t = DirectMap::new();

    // Top row
    t.insert('q', "ঙ");
    t.insert('Q', "ং");
    t.insert('w', "য");
    t.insert('W', "য়");
    t.insert('e', "ড");
    t.insert('E', "ঢ");
    t.insert('r', "প");
    t.insert('R', "ফ");
    t.insert('t', "ট");
    t.insert('T', "ঠ");
    t.insert('y', "চ");
    t.insert('Y', "ছ");
    t.insert('u', "জ");
    t.insert('U', "ঝ");
    t.insert('i', "হ");
    t.insert('I', "ঞ");
    t.insert('o', "গ");
    t.insert('O', "ঘ");
    t.insert('p', "ড়");
    t.insert('P', "ঢ়");

    // Home row: vowel signs on the left hand, core consonants on the right
    t.insert('a', "ৃ");
    t.insert('A', "ঋ");
    t.insert('s', "ু");
    t.insert('S', "ূ");
    t.insert('d', "ি");
    t.insert('D', "ী");
    t.insert('f', "া");
    t.insert('F', "অ");
    t.insert('g', "্");
    t.insert('G', "।");
    t.insert('h', "ব");
    t.insert('H', "ভ");
    t.insert('j', "ক");
    t.insert('J', "খ");
    t.insert('k', "ত");
    t.insert('K', "থ");
    t.insert('l', "দ");
    t.insert('L', "ধ");

    // Bottom row
    t.insert('z', "্র");
    t.insert('Z', "্য");
    t.insert('x', "ও");
    t.insert('X', "ৌ");
    t.insert('c', "ে");
    t.insert('C', "ৈ");
    t.insert('v', "র");
    t.insert('V', "ল");
    t.insert('b', "ন");
    t.insert('B', "ণ");
    t.insert('n', "স");
    t.insert('N', "ষ");
    t.insert('m', "ম");
    t.insert('M', "শ");

    t
}
