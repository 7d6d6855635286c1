//! Error types for initialization and parse boundaries.
//!
//! Draw-time failures never surface here: out-of-bounds coordinates resolve
//! to a no-op in the index mapper, malformed grid tokens degrade to black,
//! and an absent pixel sink turns every drawing call into a no-op. The only
//! refusals happen before anything is displayed.

use derive_more::{Display, Error};

/// Errors returned by geometry construction and grid parsing.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Panel (or grid) dimensions were zero on one or both axes.
    #[display("panel dimensions must be positive, got {width}x{height}")]
    BadDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Panel (or grid) area exceeds the chain's pixel budget.
    #[display("panel of {width}x{height} exceeds the supported pixel budget")]
    PixelBudgetExceeded {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Serialized grid text did not start with a `<cols>x<rows>;` header.
    #[display("grid text must start with a \"<cols>x<rows>;\" header")]
    MalformedGridHeader,
}

/// Result alias using the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
