//! Color blending: linear channel interpolation, panel-relative gradient
//! fields, and HSV → RGB conversion for animated hue effects.

use micromath::F32Ext as _;

use crate::geometry::PanelGeometry;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used throughout the crate.
pub use smart_leds::RGB8;

/// Axis along which a two-color gradient runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientMode {
    /// Along the panel's height (text) axis.
    Horizontal,
    /// Along the panel's width (glyph-row) axis.
    Vertical,
    /// Along both axes summed.
    Diagonal,
}

/// Interpolate one channel: `floor(a + (b - a) * t)` with `t` clamped to
/// `[0, 1]`.
#[must_use]
pub fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    let mixed = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    mixed.floor() as u8
}

/// Interpolate two colors channel by channel.
///
/// Endpoint-exact: `t = 0` yields `a`, `t = 1` yields `b`.
#[must_use]
pub fn blend(a: RGB8, b: RGB8, t: f32) -> RGB8 {
    RGB8::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

/// Gradient color for cell `(x, y)` of a panel.
///
/// The blend position is the cell's normalized position along the chosen
/// axis: `position / (extent - 1)`, or 0 whenever the axis extent is a
/// single cell. Diagonal mode sums both positions and normalizes by the
/// summed extents. Positions are panel-relative, so a gradient looks the
/// same whether it colors a full fill or only the lit cells of a glyph.
#[must_use]
pub fn gradient_at(
    geometry: &PanelGeometry,
    x: usize,
    y: usize,
    from: RGB8,
    to: RGB8,
    mode: GradientMode,
) -> RGB8 {
    let t = match mode {
        GradientMode::Horizontal => axis_position(y, geometry.height()),
        GradientMode::Vertical => axis_position(x, geometry.width()),
        GradientMode::Diagonal => {
            let span = (geometry.width() - 1) + (geometry.height() - 1);
            if span == 0 {
                0.0
            } else {
                (x + y) as f32 / span as f32
            }
        }
    };
    blend(from, to, t)
}

fn axis_position(position: usize, extent: usize) -> f32 {
    if extent <= 1 {
        0.0
    } else {
        position as f32 / (extent - 1) as f32
    }
}

/// Convert HSV to RGB.
///
/// `hue_degrees` wraps into `[0, 360)` (negative hues allowed); saturation
/// and value clamp to `[0, 1]`. Standard chroma / largest-component / match
/// construction.
///
/// # Example
///
/// ```
/// use neopanel::color::hsv_to_rgb;
/// use smart_leds::RGB8;
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RGB8::new(255, 0, 0));
/// assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB8::new(0, 255, 0));
/// assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), RGB8::new(0, 0, 255));
/// ```
#[must_use]
pub fn hsv_to_rgb(hue_degrees: f32, saturation: f32, value: f32) -> RGB8 {
    let hue = ((hue_degrees % 360.0) + 360.0) % 360.0;
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    let chroma = value * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let base = value - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, secondary, 0.0)
    } else if hue < 120.0 {
        (secondary, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, secondary)
    } else if hue < 240.0 {
        (0.0, secondary, chroma)
    } else if hue < 300.0 {
        (secondary, 0.0, chroma)
    } else {
        (chroma, 0.0, secondary)
    };

    RGB8::new(
        to_channel(r + base),
        to_channel(g + base),
        to_channel(b + base),
    )
}

fn to_channel(unit: f32) -> u8 {
    (unit * 255.0).floor() as u8
}
