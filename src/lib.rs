//! Text and color-effect rendering for NeoPixel-style (WS2812) LED matrix panels.
//!
//! A panel is a rectangular grid of LEDs wired as a single serial chain. This
//! crate maps logical `(x, y)` coordinates onto chain indices, lays out bitmap
//! font text (static, centered, or scrolling), blends colors (linear gradients
//! and HSV hue fields), and paces animation frames with cooperative
//! cancellation. The physical chain driver stays behind the [`PixelSink`]
//! trait and the time source behind [`FrameClock`], so the same engine runs
//! against hardware or a headless host simulator.
//!
//! # Glossary
//!
//! - **Panel**: the rectangular grid of addressable LEDs, width × height cells.
//! - **Serpentine wiring**: chain wiring where odd rows run in reverse order.
//! - **Glyph**: fixed-width column bitmap for one character.
//! - **Column stream**: the concatenated glyph columns (plus spacers) of a
//!   string, used for layout and scrolling.
//! - **Sweep**: one full pass of a scrolling string across the panel.
//! - **Pixel sink**: the external capability that writes colors to the LEDs.
//!
//! # Example
//!
//! Render centered text on an 8×32 serpentine panel backed by an in-memory
//! sink:
//!
//! ```
//! use neopanel::{
//!     clock::ManualClock,
//!     color::colors,
//!     geometry::PanelGeometry,
//!     matrix::{Matrix, StopFlag},
//!     sink::MemorySink,
//! };
//!
//! let geometry = PanelGeometry::PANEL_8X32;
//! let stop = StopFlag::new();
//! let sink = MemorySink::new(geometry.len());
//! let mut matrix = Matrix::new(geometry, Some(sink), ManualClock::new(), &stop);
//!
//! matrix.set_brightness(60);
//! matrix.show_text("HI", colors::CYAN);
//! ```
//!
//! Drawing calls on a matrix with no sink (`None`) are silent no-ops: a
//! display device has no better channel to report errors than its own LEDs,
//! so draw-time problems degrade instead of failing. Initialization and grid
//! parsing are the only fallible boundaries; see [`Error`].
//!
//! [`PixelSink`]: crate::sink::PixelSink
//! [`FrameClock`]: crate::clock::FrameClock

#![no_std]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

#[macro_use]
mod fmt;

pub mod clock;
pub mod color;
mod error;
pub mod font;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod matrix;
pub mod sink;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
