//! Bitmap font tables: fixed-width column glyphs with a total fallback chain.
//!
//! A [`Glyph`] is five column bytes; bit `i` of a column lights row `i`
//! (bit 0 is the top row, eight rows tall). Glyph lookup never fails:
//! characters without a dedicated glyph fall back to the uppercase form
//! (for lowercase ASCII) and finally to the blank space glyph, so any
//! `char` renders as *something* — possibly nothing visible, never an error.

/// Columns per glyph.
pub const GLYPH_WIDTH: usize = 5;

/// Rows per glyph (bit 0 = top row).
pub const GLYPH_HEIGHT: usize = 8;

/// Column bitmap for one character.
pub type Glyph = [u8; GLYPH_WIDTH];

/// The all-blank glyph, used as the final lookup fallback.
pub const BLANK_GLYPH: Glyph = [0; GLYPH_WIDTH];

/// Character → glyph table with a total fallback chain.
///
/// Entries must be sorted by `char` and unique; [`FontTable::new`] validates
/// this at compile time for `const` tables.
///
/// # Example
///
/// ```
/// use neopanel::font::{BLANK_GLYPH, FONT_5X8};
///
/// // Dedicated glyph.
/// assert_ne!(FONT_5X8.glyph('A'), BLANK_GLYPH);
/// // Unmapped characters render blank.
/// assert_eq!(FONT_5X8.glyph('€'), BLANK_GLYPH);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FontTable<'a> {
    entries: &'a [(char, Glyph)],
}

impl<'a> FontTable<'a> {
    /// Build a table from entries sorted by character.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for `const` tables) when entries are out of
    /// order or duplicated.
    #[must_use]
    pub const fn new(entries: &'a [(char, Glyph)]) -> Self {
        let mut i = 1;
        while i < entries.len() {
            assert!(
                (entries[i - 1].0 as u32) < (entries[i].0 as u32),
                "font entries must be sorted by char and unique"
            );
            i += 1;
        }
        Self { entries }
    }

    /// Number of dedicated glyphs in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no dedicated glyphs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dedicated glyph for `ch`, if the table has one.
    #[must_use]
    pub fn dedicated(&self, ch: char) -> Option<Glyph> {
        self.entries
            .binary_search_by_key(&ch, |&(key, _)| key)
            .ok()
            .map(|found| self.entries[found].1)
    }

    /// Resolve `ch` to a glyph. Total: every character resolves.
    ///
    /// Lookup chain: dedicated glyph, then the uppercase glyph for lowercase
    /// ASCII letters, then [`BLANK_GLYPH`].
    #[must_use]
    pub fn glyph(&self, ch: char) -> Glyph {
        if let Some(glyph) = self.dedicated(ch) {
            return glyph;
        }
        if ch.is_ascii_lowercase()
            && let Some(glyph) = self.dedicated(ch.to_ascii_uppercase())
        {
            return glyph;
        }
        BLANK_GLYPH
    }
}

/// Built-in 5×8 font covering printable ASCII `' '..='z'`.
///
/// Lowercase letters carry their own glyphs (with descenders for g, j, p,
/// q, y); the handful of printable ASCII characters past `'z'` fall back to
/// blank.
pub const FONT_5X8: FontTable<'static> = FontTable::new(&FONT_5X8_ENTRIES);

const FONT_5X8_ENTRIES: [(char, Glyph); 91] = [
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x00, 0x00, 0x5F, 0x00, 0x00]),
    ('"', [0x00, 0x07, 0x00, 0x07, 0x00]),
    ('#', [0x14, 0x7F, 0x14, 0x7F, 0x14]),
    ('$', [0x24, 0x2A, 0x7F, 0x2A, 0x12]),
    ('%', [0x23, 0x13, 0x08, 0x64, 0x62]),
    ('&', [0x36, 0x49, 0x55, 0x22, 0x50]),
    ('\'', [0x00, 0x05, 0x03, 0x00, 0x00]),
    ('(', [0x00, 0x1C, 0x22, 0x41, 0x00]),
    (')', [0x00, 0x41, 0x22, 0x1C, 0x00]),
    ('*', [0x14, 0x08, 0x3E, 0x08, 0x14]),
    ('+', [0x08, 0x08, 0x3E, 0x08, 0x08]),
    (',', [0x00, 0x50, 0x30, 0x00, 0x00]),
    ('-', [0x08, 0x08, 0x08, 0x08, 0x08]),
    ('.', [0x00, 0x60, 0x60, 0x00, 0x00]),
    ('/', [0x20, 0x10, 0x08, 0x04, 0x02]),
    ('0', [0x3E, 0x51, 0x49, 0x45, 0x3E]),
    ('1', [0x00, 0x42, 0x7F, 0x40, 0x00]),
    ('2', [0x42, 0x61, 0x51, 0x49, 0x46]),
    ('3', [0x21, 0x41, 0x45, 0x4B, 0x31]),
    ('4', [0x18, 0x14, 0x12, 0x7F, 0x10]),
    ('5', [0x27, 0x45, 0x45, 0x45, 0x39]),
    ('6', [0x3C, 0x4A, 0x49, 0x49, 0x30]),
    ('7', [0x01, 0x71, 0x09, 0x05, 0x03]),
    ('8', [0x36, 0x49, 0x49, 0x49, 0x36]),
    ('9', [0x06, 0x49, 0x49, 0x29, 0x1E]),
    (':', [0x00, 0x36, 0x36, 0x00, 0x00]),
    (';', [0x00, 0x56, 0x36, 0x00, 0x00]),
    ('<', [0x08, 0x14, 0x22, 0x41, 0x00]),
    ('=', [0x14, 0x14, 0x14, 0x14, 0x14]),
    ('>', [0x00, 0x41, 0x22, 0x14, 0x08]),
    ('?', [0x02, 0x01, 0x51, 0x09, 0x06]),
    ('@', [0x32, 0x49, 0x79, 0x41, 0x3E]),
    ('A', [0x7E, 0x11, 0x11, 0x11, 0x7E]),
    ('B', [0x7F, 0x49, 0x49, 0x49, 0x36]),
    ('C', [0x3E, 0x41, 0x41, 0x41, 0x22]),
    ('D', [0x7F, 0x41, 0x41, 0x22, 0x1C]),
    ('E', [0x7F, 0x49, 0x49, 0x49, 0x41]),
    ('F', [0x7F, 0x09, 0x09, 0x09, 0x01]),
    ('G', [0x3E, 0x41, 0x49, 0x49, 0x7A]),
    ('H', [0x7F, 0x08, 0x08, 0x08, 0x7F]),
    ('I', [0x00, 0x41, 0x7F, 0x41, 0x00]),
    ('J', [0x20, 0x40, 0x41, 0x3F, 0x01]),
    ('K', [0x7F, 0x08, 0x14, 0x22, 0x41]),
    ('L', [0x7F, 0x40, 0x40, 0x40, 0x40]),
    ('M', [0x7F, 0x02, 0x0C, 0x02, 0x7F]),
    ('N', [0x7F, 0x04, 0x08, 0x10, 0x7F]),
    ('O', [0x3E, 0x41, 0x41, 0x41, 0x3E]),
    ('P', [0x7F, 0x09, 0x09, 0x09, 0x06]),
    ('Q', [0x3E, 0x41, 0x51, 0x21, 0x5E]),
    ('R', [0x7F, 0x09, 0x19, 0x29, 0x46]),
    ('S', [0x46, 0x49, 0x49, 0x49, 0x31]),
    ('T', [0x01, 0x01, 0x7F, 0x01, 0x01]),
    ('U', [0x3F, 0x40, 0x40, 0x40, 0x3F]),
    ('V', [0x1F, 0x20, 0x40, 0x20, 0x1F]),
    ('W', [0x7F, 0x20, 0x18, 0x20, 0x7F]),
    ('X', [0x63, 0x14, 0x08, 0x14, 0x63]),
    ('Y', [0x03, 0x04, 0x78, 0x04, 0x03]),
    ('Z', [0x61, 0x51, 0x49, 0x45, 0x43]),
    ('[', [0x00, 0x7F, 0x41, 0x41, 0x00]),
    ('\\', [0x02, 0x04, 0x08, 0x10, 0x20]),
    (']', [0x00, 0x41, 0x41, 0x7F, 0x00]),
    ('^', [0x04, 0x02, 0x01, 0x02, 0x04]),
    ('_', [0x40, 0x40, 0x40, 0x40, 0x40]),
    ('`', [0x00, 0x01, 0x02, 0x04, 0x00]),
    ('a', [0x20, 0x54, 0x54, 0x54, 0x78]),
    ('b', [0x7F, 0x48, 0x44, 0x44, 0x38]),
    ('c', [0x38, 0x44, 0x44, 0x44, 0x28]),
    ('d', [0x38, 0x44, 0x44, 0x48, 0x7F]),
    ('e', [0x38, 0x54, 0x54, 0x54, 0x18]),
    ('f', [0x08, 0x7E, 0x09, 0x01, 0x02]),
    ('g', [0x3E, 0xC9, 0xC9, 0xC9, 0x3E]),
    ('h', [0x7F, 0x08, 0x04, 0x04, 0x78]),
    ('i', [0x00, 0x44, 0x7D, 0x40, 0x00]),
    ('j', [0x00, 0x40, 0x40, 0xBD, 0x00]),
    ('k', [0x7F, 0x10, 0x28, 0x44, 0x00]),
    ('l', [0x00, 0x41, 0x7F, 0x40, 0x00]),
    ('m', [0x7C, 0x04, 0x18, 0x04, 0x78]),
    ('n', [0x7C, 0x08, 0x04, 0x04, 0x78]),
    ('o', [0x38, 0x44, 0x44, 0x44, 0x38]),
    ('p', [0xFC, 0x24, 0x24, 0x24, 0x18]),
    ('q', [0x18, 0x24, 0x24, 0x24, 0xFC]),
    ('r', [0x7C, 0x08, 0x04, 0x04, 0x08]),
    ('s', [0x48, 0x54, 0x54, 0x54, 0x20]),
    ('t', [0x04, 0x3F, 0x44, 0x40, 0x20]),
    ('u', [0x3C, 0x40, 0x40, 0x20, 0x7C]),
    ('v', [0x1C, 0x20, 0x40, 0x20, 0x1C]),
    ('w', [0x3C, 0x40, 0x30, 0x40, 0x3C]),
    ('x', [0x44, 0x28, 0x10, 0x28, 0x44]),
    ('y', [0x1C, 0xA0, 0xA0, 0xA0, 0x7C]),
    ('z', [0x44, 0x64, 0x54, 0x4C, 0x44]),
];
