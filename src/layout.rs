//! Text layout: turning a string into a stream of glyph columns, placing
//! that stream on a panel, and generating the offsets of a scroll sweep.
//!
//! Text advances along the panel's height axis; the 8 rows of each glyph
//! lie along the width axis, centered (bit 0 of a column byte is the
//! lowest-`x` row). A one-column gap separates adjacent characters, with
//! no gap after the last one.

use heapless::Vec;

use crate::font::{FontTable, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::geometry::{MAX_PIXELS, PanelGeometry};

/// Blank columns between adjacent characters.
pub const SPACING: usize = 1;

/// Column-stream capacity. Longer text is silently truncated at a
/// character boundary.
pub const MAX_STREAM_COLUMNS: usize = 256;

/// One lit cell of a laid-out string, tagged with the character it
/// belongs to so callers can color per character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LitCell {
    /// Panel x coordinate (width axis).
    pub x: u8,
    /// Panel y coordinate (height axis).
    pub y: u8,
    /// Index of the source character within the text.
    pub char_index: u8,
}

/// Columns the text occupies: `n * 5 + (n - 1)` for `n` characters,
/// 0 for empty text.
#[must_use]
pub fn logical_width(text: &str) -> usize {
    let n = text.chars().count();
    if n == 0 {
        0
    } else {
        n * GLYPH_WIDTH + (n - 1) * SPACING
    }
}

/// Character index that owns stream column `column` (spacers belong to
/// the character before them).
#[must_use]
pub const fn char_index_of_column(column: usize) -> usize {
    column / (GLYPH_WIDTH + SPACING)
}

/// Flatten `text` into glyph column bytes, one spacer column before every
/// character but the first.
#[must_use]
pub fn column_stream(font: &FontTable<'_>, text: &str) -> Vec<u8, MAX_STREAM_COLUMNS> {
    let mut stream = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let glyph = font.glyph(ch);
        let needed = if i == 0 { GLYPH_WIDTH } else { GLYPH_WIDTH + SPACING };
        if stream.len() + needed > stream.capacity() {
            break;
        }
        if i != 0 {
            for _ in 0..SPACING {
                let _ = stream.push(0);
            }
        }
        for &bits in &glyph {
            let _ = stream.push(bits);
        }
    }
    stream
}

/// Offsets of a full scroll sweep along an axis of `extent` cells for a
/// stream of `len` columns, far edge first.
///
/// The first offset places the stream just past the far edge (a blank
/// frame); the last leaves only the final column at position 0. A 5-column
/// stream on an 8-cell axis yields 13 offsets.
pub fn sweep_offsets(extent: usize, len: usize) -> impl Iterator<Item = i32> {
    let extent = extent as i32;
    let len = len as i32;
    (1 - len..=extent).rev()
}

/// Stream columns visible at `offset`: pairs of (panel position, stream
/// index) for columns landing inside `0..extent`.
pub fn visible_columns(
    offset: i32,
    stream_len: usize,
    extent: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..stream_len).filter_map(move |i| {
        let position = offset + i as i32;
        if (0..extent as i32).contains(&position) {
            Some((position as usize, i))
        } else {
            None
        }
    })
}

/// Lit cells of `text` placed with glyph row 0 at `x0` and the first
/// column at `y0` along the height axis. Cells off the panel are dropped.
#[must_use]
pub fn layout_offset(
    geometry: &PanelGeometry,
    font: &FontTable<'_>,
    text: &str,
    x0: i32,
    y0: i32,
) -> Vec<LitCell, MAX_PIXELS> {
    let stream = column_stream(font, text);
    let mut cells = Vec::new();
    for (y, column) in visible_columns(y0, stream.len(), geometry.height()) {
        let bits = stream[column];
        for bit in 0..GLYPH_HEIGHT as i32 {
            if bits >> bit & 1 == 0 {
                continue;
            }
            let x = x0 + bit;
            if (0..geometry.width() as i32).contains(&x) {
                let _ = cells.push(LitCell {
                    x: x as u8,
                    y: y as u8,
                    char_index: char_index_of_column(column) as u8,
                });
            }
        }
    }
    cells
}

/// Lit cells of `text` centered along the height axis, glyph rows
/// centered along the width axis.
///
/// Text wider than the panel starts at position 0 and clips off the far
/// edge.
#[must_use]
pub fn layout_centered(
    geometry: &PanelGeometry,
    font: &FontTable<'_>,
    text: &str,
) -> Vec<LitCell, MAX_PIXELS> {
    let x0 = (geometry.width() as i32 - GLYPH_HEIGHT as i32).div_euclid(2);
    let y0 = (geometry.height() as i32 - logical_width(text) as i32)
        .div_euclid(2)
        .max(0);
    layout_offset(geometry, font, text, x0, y0)
}
