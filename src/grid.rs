//! Pixel-art grids and their text form.
//!
//! The text form is `"WxH;"` followed by `H` rows of `W` comma-separated
//! `#rrggbb` tokens, rows joined by `|`, e.g.
//! `"2x2;#ff0000,#00ff00|#0000ff,#ffffff"`. The header must be well
//! formed; pixel tokens degrade instead of failing, so one bad token
//! costs one black pixel rather than the whole image.

use core::fmt::Write as _;

use heapless::{String, Vec};
use smart_leds::RGB8;

use crate::error::{Error, Result};
use crate::geometry::MAX_PIXELS;

/// Capacity of a serialized grid: the largest header plus one 8-byte
/// `#rrggbb` token (with separator) per pixel.
pub const GRID_TEXT_CAP: usize = 8 + MAX_PIXELS * 8;

/// A rectangular block of RGB pixels in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<RGB8, MAX_PIXELS>,
}

impl PixelGrid {
    /// An all-black grid. Dimensions must be nonzero and cover at most
    /// [`MAX_PIXELS`] pixels.
    ///
    /// # Errors
    ///
    /// [`Error::BadDimensions`] for a zero dimension,
    /// [`Error::PixelBudgetExceeded`] when `width * height` is over budget.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let pixel_count = width
            .checked_mul(height)
            .ok_or(Error::PixelBudgetExceeded { width, height })?;
        if width == 0 || height == 0 {
            return Err(Error::BadDimensions { width, height });
        }
        if pixel_count > MAX_PIXELS {
            return Err(Error::PixelBudgetExceeded { width, height });
        }
        let mut pixels = Vec::new();
        pixels
            .resize(pixel_count, RGB8::default())
            .expect("pixel count fits the budget");
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Color at `(x, y)`, black when out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> RGB8 {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            RGB8::default()
        }
    }

    /// Set the color at `(x, y)`; out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: RGB8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Parse the text form.
    ///
    /// The header is strict; pixel data is forgiving. Missing rows,
    /// missing tokens, and malformed tokens all read as black, and extra
    /// rows or tokens are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedGridHeader`] when the `"WxH;"` prefix is absent
    /// or its numbers do not parse, plus the [`new`](Self::new) errors for
    /// bad dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use neopanel::grid::PixelGrid;
    /// use smart_leds::RGB8;
    ///
    /// let grid = PixelGrid::parse("2x2;#ff0000,#00ff00|#0000ff,#ffffff")?;
    /// assert_eq!(grid.get(1, 0), RGB8::new(0, 255, 0));
    /// assert_eq!(grid.get(0, 1), RGB8::new(0, 0, 255));
    /// # Ok::<(), neopanel::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let (header, body) = text.split_once(';').ok_or(Error::MalformedGridHeader)?;
        let (width, height) = header.split_once('x').ok_or(Error::MalformedGridHeader)?;
        let width: usize = width.trim().parse().map_err(|_| Error::MalformedGridHeader)?;
        let height: usize = height.trim().parse().map_err(|_| Error::MalformedGridHeader)?;

        let mut grid = Self::new(width, height)?;
        for (y, row) in body.split('|').take(height).enumerate() {
            for (x, token) in row.split(',').take(width).enumerate() {
                grid.set(x, y, parse_token(token.trim()));
            }
        }
        Ok(grid)
    }

    /// Render the text form, lowercase hex, always `width` tokens per row
    /// and `height` rows.
    #[must_use]
    pub fn serialize(&self) -> String<GRID_TEXT_CAP> {
        let mut out = String::new();
        // Writes cannot fail: GRID_TEXT_CAP covers the largest grid.
        let _ = write!(out, "{}x{};", self.width, self.height);
        for y in 0..self.height {
            if y != 0 {
                let _ = out.push('|');
            }
            for x in 0..self.width {
                if x != 0 {
                    let _ = out.push(',');
                }
                let color = self.get(x, y);
                let _ = write!(out, "#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
            }
        }
        out
    }
}

/// `#rrggbb` (either case) to a color; anything else reads as black.
fn parse_token(token: &str) -> RGB8 {
    let Some(hex) = token.strip_prefix('#') else {
        return RGB8::default();
    };
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return RGB8::default();
    }
    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or_default()
    };
    RGB8::new(channel(0..2), channel(2..4), channel(4..6))
}
