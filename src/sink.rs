//! Output seam between rendering and hardware.
//!
//! [`PixelSink`] is what the renderer draws into: a linear run of RGB
//! pixels addressed by chain index, with staged writes made visible by
//! [`present`](PixelSink::present). Drivers for real LED chains implement
//! it; [`MemorySink`] implements it in memory for host-side tests.

use smart_leds::RGB8;

use crate::geometry::MAX_PIXELS;

/// A presentable run of RGB pixels addressed by chain index.
pub trait PixelSink {
    /// Number of pixels in the chain.
    fn len(&self) -> usize;

    /// Whether the chain is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a color at `index`. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Stage black everywhere.
    fn clear(&mut self);

    /// Make all staged writes visible.
    fn present(&mut self);

    /// Global brightness, 0..=255. Takes effect at the next
    /// [`present`](PixelSink::present).
    fn set_brightness(&mut self, brightness: u8);
}

/// In-memory [`PixelSink`] that records what a chain would show.
///
/// Staged writes stay invisible until [`present`](PixelSink::present)
/// copies them into the shown buffer, mirroring a double-buffered driver.
/// Tests inspect [`shown`](MemorySink::shown) and the present count.
#[derive(Debug)]
pub struct MemorySink {
    staged: [RGB8; MAX_PIXELS],
    shown: [RGB8; MAX_PIXELS],
    len: usize,
    brightness: u8,
    presents: usize,
}

impl MemorySink {
    /// Create a sink of `len` pixels, all black. Lengths beyond
    /// [`MAX_PIXELS`] are capped.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            staged: [RGB8::default(); MAX_PIXELS],
            shown: [RGB8::default(); MAX_PIXELS],
            len: len.min(MAX_PIXELS),
            brightness: u8::MAX,
            presents: 0,
        }
    }

    /// Pixels as of the last [`present`](PixelSink::present).
    #[must_use]
    pub fn shown(&self) -> &[RGB8] {
        &self.shown[..self.len]
    }

    /// Staged pixels not yet presented.
    #[must_use]
    pub fn staged(&self) -> &[RGB8] {
        &self.staged[..self.len]
    }

    /// Shown color at `index`, black when out of range.
    #[must_use]
    pub fn shown_at(&self, index: usize) -> RGB8 {
        self.shown().get(index).copied().unwrap_or_default()
    }

    /// How many times [`present`](PixelSink::present) has run.
    #[must_use]
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Current global brightness.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl PixelSink for MemorySink {
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if index < self.len {
            self.staged[index] = color;
        }
    }

    fn clear(&mut self) {
        self.staged[..self.len].fill(RGB8::default());
    }

    fn present(&mut self) {
        self.shown[..self.len].copy_from_slice(&self.staged[..self.len]);
        self.presents += 1;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
