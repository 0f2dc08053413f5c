//! Provhat fixed layout (phonetically positioned keys).

use super::DirectMap;

/// Build the Provhat map.
pub fn build_provhat() -> DirectMap {
    let mut t = DirectMap::new();

    t.insert('k', "ক");
    t.insert('K', "খ");
    t.insert('g', "গ");
    t.insert('G', "ঘ");
    t.insert('c', "চ");
    t.insert('C', "ছ");
    t.insert('j', "জ");
    t.insert('J', "ঝ");
    t.insert('t', "ত");
    t.insert('T', "ট");
    t.insert('d', "দ");
    t.insert('D', "ড");
    t.insert('n', "ন");
    t.insert('N', "ণ");
    t.insert('p', "প");
    t.insert('P', "ফ");
    t.insert('f', "ফ");
    t.insert('b', "ব");
    t.insert('B', "ভ");
    t.insert('v', "ভ");
    t.insert('m', "ম");
    t.insert('M', "ঙ");
    t.insert('y', "য");
    t.insert('Y', "য়");
    t.insert('r', "র");
    t.insert('R', "ড়");
    t.insert('l', "ল");
    t.insert('L', "ঢ়");
    t.insert('s', "স");
    t.insert('S', "শ");
    t.insert('z', "য");
    t.insert('Z', "ঞ");
    t.insert('h', "হ");
    t.insert('H', "ঃ");
    t.insert('x', "ড়");
    t.insert('X', "ঢ়");
    t.insert('w', "ৗ");
    t.insert('W', "ঁ");
    t.insert('q', "ং");
    t.insert('Q', "ৎ");

    // Vowels: dependent signs unshifted, independent forms shifted
    t.insert('a', "া");
    t.insert('A', "আ");
    t.insert('e', "ে");
    t.insert('E', "ঈ");
    t.insert('i', "ি");
    t.insert('I', "ই");
    t.insert('o', "ো");
    t.insert('O', "ও");
    t.insert('u', "ু");
    t.insert('U', "উ");

    t
}
