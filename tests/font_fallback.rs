#![allow(missing_docs)]
//! Host-level tests for the glyph table and its fallback chain.

use neopanel::font::{BLANK_GLYPH, FONT_5X8, FontTable, Glyph};

#[test]
fn lookup_is_total_over_printable_ascii() {
    // Every printable ASCII character resolves to *some* glyph.
    for ch in ' '..='~' {
        let _: Glyph = FONT_5X8.glyph(ch);
    }
}

#[test]
fn dedicated_glyphs_are_found() {
    assert_eq!(FONT_5X8.glyph('H'), [0x7F, 0x08, 0x08, 0x08, 0x7F]);
    assert_eq!(FONT_5X8.glyph('I'), [0x00, 0x41, 0x7F, 0x41, 0x00]);
    assert_eq!(FONT_5X8.glyph(' '), BLANK_GLYPH);
}

#[test]
fn lowercase_has_its_own_glyphs() {
    assert_ne!(FONT_5X8.glyph('a'), FONT_5X8.glyph('A'));
    assert_ne!(FONT_5X8.glyph('a'), BLANK_GLYPH);
}

#[test]
fn lowercase_falls_back_to_uppercase_when_undedicated() {
    // A table with only uppercase entries exercises the case fallback.
    const UPPER_ONLY: FontTable<'static> = FontTable::new(&[
        ('A', [0x7E, 0x11, 0x11, 0x11, 0x7E]),
        ('B', [0x7F, 0x49, 0x49, 0x49, 0x36]),
    ]);
    assert_eq!(UPPER_ONLY.glyph('a'), UPPER_ONLY.glyph('A'));
    assert_eq!(UPPER_ONLY.glyph('b'), UPPER_ONLY.glyph('B'));
    assert_eq!(UPPER_ONLY.dedicated('a'), None);
}

#[test]
fn unmapped_characters_render_blank() {
    assert_eq!(FONT_5X8.glyph('€'), BLANK_GLYPH);
    assert_eq!(FONT_5X8.glyph('\n'), BLANK_GLYPH);
    assert_eq!(FONT_5X8.glyph('~'), BLANK_GLYPH);
}
