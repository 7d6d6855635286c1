//! Panel geometry and the `(x, y)` → chain-index mapper.
//!
//! [`PanelGeometry`] describes a rectangular panel once — width, height, and
//! wiring direction — and [`PanelGeometry::index`] resolves every coordinate
//! to a position on the serial chain. All rendering in this crate goes
//! through that one function; nothing else computes chain indices.
//!
//! Coordinates use a screen-style convention: `(0, 0)` is the top-left
//! corner, `x` increases to the right, and `y` increases downward.

use crate::{Error, Result};

/// Largest panel a single chain may address, in pixels.
pub const MAX_PIXELS: usize = 256;

/// Immutable description of a rectangular LED panel and its chain wiring.
///
/// With `serpentine` wiring, odd-indexed rows are stored right-to-left on
/// the physical chain; even rows left-to-right. Without it, every row runs
/// left-to-right.
///
/// Geometry is fixed for the lifetime of a session. Changing panel size
/// means building a new geometry, a new sink, and a new
/// [`Matrix`](crate::matrix::Matrix).
///
/// # Example
///
/// ```
/// use neopanel::geometry::PanelGeometry;
///
/// let panel = PanelGeometry::new(3, 2, true).unwrap();
/// // Even row: left-to-right.
/// assert_eq!(panel.index(0, 0), Some(0));
/// assert_eq!(panel.index(2, 0), Some(2));
/// // Odd row: reversed.
/// assert_eq!(panel.index(0, 1), Some(5));
/// assert_eq!(panel.index(2, 1), Some(3));
/// // Off-panel: no index, no error.
/// assert_eq!(panel.index(3, 0), None);
/// assert_eq!(panel.index(0, -1), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    width: usize,
    height: usize,
    serpentine: bool,
}

impl PanelGeometry {
    /// Fixed 8×8 serpentine panel.
    pub const PANEL_8X8: Self = Self {
        width: 8,
        height: 8,
        serpentine: true,
    };

    /// Fixed 8×16 serpentine panel.
    pub const PANEL_8X16: Self = Self {
        width: 8,
        height: 16,
        serpentine: true,
    };

    /// Fixed 8×32 serpentine panel (8 glyph rows, 32-column text axis).
    pub const PANEL_8X32: Self = Self {
        width: 8,
        height: 32,
        serpentine: true,
    };

    /// Create a geometry, refusing zero dimensions and areas over
    /// [`MAX_PIXELS`].
    ///
    /// A refused call changes nothing: callers keep whatever geometry they
    /// already had.
    ///
    /// # Errors
    ///
    /// [`Error::BadDimensions`] when `width` or `height` is zero;
    /// [`Error::PixelBudgetExceeded`] when `width * height > MAX_PIXELS`.
    pub fn new(width: usize, height: usize, serpentine: bool) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::BadDimensions { width, height });
        }
        match width.checked_mul(height) {
            Some(area) if area <= MAX_PIXELS => Ok(Self {
                width,
                height,
                serpentine,
            }),
            _ => Err(Error::PixelBudgetExceeded { width, height }),
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always `false`: a geometry has at least one pixel by construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether odd rows run in reverse chain order.
    #[must_use]
    pub const fn is_serpentine(&self) -> bool {
        self.serpentine
    }

    /// Map `(x, y)` to a chain index, or `None` when the coordinate lies
    /// off-panel.
    ///
    /// In-bounds coordinates map to `y * width + x`, with odd rows mirrored
    /// (`x ↦ width - 1 - x`) on serpentine panels. Restricted to in-bounds
    /// inputs this is a bijection onto `[0, width * height)`.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let row_start = y * self.width;
        let offset = if self.serpentine && y % 2 == 1 {
            self.width - 1 - x
        } else {
            x
        };
        Some(row_start + offset)
    }
}
