#![allow(missing_docs)]
//! Host-level tests for text layout, centering, and scroll sweeps.

use neopanel::font::FONT_5X8;
use neopanel::geometry::PanelGeometry;

const PANEL_8X8: PanelGeometry = PanelGeometry::PANEL_8X8;
const PANEL_8X32: PanelGeometry = PanelGeometry::PANEL_8X32;
use neopanel::layout::{
    char_index_of_column, column_stream, layout_centered, layout_offset, logical_width,
    sweep_offsets, visible_columns,
};

#[test]
fn logical_width_has_no_trailing_spacer() {
    assert_eq!(logical_width(""), 0);
    assert_eq!(logical_width("A"), 5);
    assert_eq!(logical_width("HI"), 11);
    assert_eq!(logical_width("ABC"), 17);
}

#[test]
fn spacer_columns_belong_to_the_preceding_character() {
    assert_eq!(char_index_of_column(0), 0);
    assert_eq!(char_index_of_column(4), 0);
    assert_eq!(char_index_of_column(5), 0);
    assert_eq!(char_index_of_column(6), 1);
    assert_eq!(char_index_of_column(11), 1);
    assert_eq!(char_index_of_column(12), 2);
}

#[test]
fn column_stream_interleaves_single_spacers() {
    let stream = column_stream(&FONT_5X8, "AB");
    assert_eq!(stream.len(), 11);
    assert_eq!(stream[5], 0, "spacer between characters");
    assert_eq!(&stream[..5], &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
}

#[test]
fn hi_centers_at_column_ten_on_8x32() {
    let cells = layout_centered(&PANEL_8X32, &FONT_5X8, "HI");
    assert!(!cells.is_empty());
    let min_y = cells.iter().map(|cell| cell.y).min().expect("lit cells");
    let max_y = cells.iter().map(|cell| cell.y).max().expect("lit cells");
    assert_eq!(min_y, 10);
    assert!(max_y <= 20);
    // The inter-character spacer column stays dark.
    assert!(cells.iter().all(|cell| cell.y != 15));
    // Glyph rows fill the full 8-cell width axis.
    assert!(cells.iter().all(|cell| cell.x < 8));
    // char_index distinguishes the two characters.
    assert!(cells.iter().any(|cell| cell.char_index == 0));
    assert!(cells.iter().any(|cell| cell.char_index == 1));
}

#[test]
fn wide_text_clips_to_the_panel() {
    let cells = layout_centered(&PANEL_8X8, &FONT_5X8, "HI");
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|cell| cell.y < 8 && cell.x < 8));
}

#[test]
fn empty_text_lays_out_nothing() {
    assert!(layout_centered(&PANEL_8X32, &FONT_5X8, "").is_empty());
}

#[test]
fn offset_layout_shifts_and_clips() {
    let at_origin = layout_offset(&PANEL_8X32, &FONT_5X8, "A", 0, 0);
    let shifted = layout_offset(&PANEL_8X32, &FONT_5X8, "A", 0, 3);
    assert_eq!(at_origin.len(), shifted.len());
    for (a, b) in at_origin.iter().zip(shifted.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y + 3, b.y);
    }
    // Shifting glyph rows drops the cells pushed off the width axis.
    let row_shifted = layout_offset(&PANEL_8X32, &FONT_5X8, "A", 4, 0);
    assert!(row_shifted.len() < at_origin.len());
    assert!(row_shifted.iter().all(|cell| cell.x >= 4));
    // Partly off the near edge of the height axis loses columns.
    let clipped = layout_offset(&PANEL_8X32, &FONT_5X8, "A", 0, -3);
    assert!(clipped.len() < at_origin.len());
    assert!(layout_offset(&PANEL_8X32, &FONT_5X8, "A", 0, -5).is_empty());
}

#[test]
fn single_glyph_sweep_is_thirteen_frames_on_extent_eight() {
    let offsets: Vec<i32> = sweep_offsets(8, 5).collect();
    assert_eq!(offsets.len(), 13);
    assert_eq!(offsets.first(), Some(&8));
    assert_eq!(offsets.last(), Some(&-4));
}

#[test]
fn sweep_covers_entry_and_exit() {
    let offsets: Vec<i32> = sweep_offsets(32, 11).collect();
    assert_eq!(offsets.len(), 32 + 11);
    // Strictly decreasing one column per frame.
    assert!(offsets.windows(2).all(|pair| pair[1] == pair[0] - 1));
}

#[test]
fn visible_columns_window_the_stream() {
    let visible: Vec<(usize, usize)> = visible_columns(-2, 5, 8).collect();
    assert_eq!(visible, [(0, 2), (1, 3), (2, 4)]);

    let all: Vec<(usize, usize)> = visible_columns(0, 5, 8).collect();
    assert_eq!(all.len(), 5);

    assert_eq!(visible_columns(8, 5, 8).count(), 0);
    assert_eq!(visible_columns(-5, 5, 8).count(), 0);
}
