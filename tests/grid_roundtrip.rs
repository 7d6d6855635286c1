#![allow(missing_docs)]
//! Host-level tests for the pixel-art grid text form.

use neopanel::Error;
use neopanel::color::RGB8;
use neopanel::grid::PixelGrid;

#[test]
fn two_by_two_round_trips() {
    let text = "2x2;#ff0000,#00ff00|#0000ff,#ffffff";
    let grid = PixelGrid::parse(text).expect("well-formed grid");
    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.get(0, 0), RGB8::new(255, 0, 0));
    assert_eq!(grid.get(1, 0), RGB8::new(0, 255, 0));
    assert_eq!(grid.get(0, 1), RGB8::new(0, 0, 255));
    assert_eq!(grid.get(1, 1), RGB8::new(255, 255, 255));
    assert_eq!(grid.serialize(), text);
}

#[test]
fn uppercase_hex_parses_and_serializes_lowercase() {
    let grid = PixelGrid::parse("1x1;#AB00FF").expect("well-formed grid");
    assert_eq!(grid.get(0, 0), RGB8::new(0xAB, 0x00, 0xFF));
    assert_eq!(grid.serialize(), "1x1;#ab00ff");
}

#[test]
fn malformed_tokens_read_as_black() {
    let grid = PixelGrid::parse("3x1;red,#12345,#00ff0g").expect("header is fine");
    assert_eq!(grid.get(0, 0), RGB8::default());
    assert_eq!(grid.get(1, 0), RGB8::default());
    assert_eq!(grid.get(2, 0), RGB8::default());
}

#[test]
fn short_data_fills_with_black_and_extra_is_ignored() {
    let sparse = PixelGrid::parse("2x2;#ff0000").expect("header is fine");
    assert_eq!(sparse.get(0, 0), RGB8::new(255, 0, 0));
    assert_eq!(sparse.get(1, 0), RGB8::default());
    assert_eq!(sparse.get(1, 1), RGB8::default());

    let overfull =
        PixelGrid::parse("1x1;#ff0000,#00ff00|#0000ff").expect("header is fine");
    assert_eq!(overfull.get(0, 0), RGB8::new(255, 0, 0));
}

#[test]
fn bad_headers_are_rejected() {
    assert_eq!(PixelGrid::parse("no header"), Err(Error::MalformedGridHeader));
    assert_eq!(PixelGrid::parse("2;#000000"), Err(Error::MalformedGridHeader));
    assert_eq!(PixelGrid::parse("axb;#000000"), Err(Error::MalformedGridHeader));
    assert_eq!(
        PixelGrid::parse("0x4;#000000"),
        Err(Error::BadDimensions { width: 0, height: 4 })
    );
    assert_eq!(
        PixelGrid::parse("100x100;#000000"),
        Err(Error::PixelBudgetExceeded {
            width: 100,
            height: 100
        })
    );
}

#[test]
fn out_of_range_access_is_harmless() {
    let mut grid = PixelGrid::new(2, 2).expect("valid dimensions");
    grid.set(5, 0, RGB8::new(1, 2, 3));
    assert_eq!(grid.get(5, 0), RGB8::default());
    grid.set(1, 1, RGB8::new(1, 2, 3));
    assert_eq!(grid.get(1, 1), RGB8::new(1, 2, 3));
}

#[test]
fn new_grid_serializes_all_black() {
    let grid = PixelGrid::new(2, 1).expect("valid dimensions");
    assert_eq!(grid.serialize(), "2x1;#000000,#000000");
}
