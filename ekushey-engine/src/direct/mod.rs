//! Fixed one-key-one-glyph layouts.
//!
//! These layouts carry no state: each keystroke resolves to exactly one
//! glyph from the table, with the shift register selecting the alternate
//! form. Keys absent from the table fall through to the caller.

mod arabic;
mod jatiyo;
mod provhat;
mod unibijoy;

use std::collections::HashMap;

pub use arabic::build_arabic;
pub use jatiyo::build_jatiyo;
pub use provhat::build_provhat;
pub use unibijoy::build_unibijoy;

/// A direct character map: one base-script key to one native-script glyph.
#[derive(Debug, Clone, Default)]
pub struct DirectMap {
    map: HashMap<char, &'static str>,
}

impl DirectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key. Shifted forms are registered under the uppercase key.
    pub fn insert(&mut self, key: char, glyph: &'static str) {
        self.map.insert(key, glyph);
    }

    /// Resolve a keystroke. The shift register selects the uppercase key;
    /// when the shifted key has no entry the unshifted one is tried, so
    /// layouts without a full shift plane still respond to caps lock.
    pub fn lookup(&self, key: char, shifted: bool) -> Option<&'static str> {
        if shifted
            && let Some(glyph) = self.map.get(&key.to_ascii_uppercase()).copied()
        {
            return Some(glyph);
        }
        self.map.get(&key.to_ascii_lowercase()).copied()
    }

    /// Iterate all (key, glyph) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }
}
