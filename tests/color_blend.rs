#![allow(missing_docs)]
//! Host-level tests for channel interpolation, gradients, and HSV.

use neopanel::color::{GradientMode, RGB8, blend, colors, gradient_at, hsv_to_rgb, lerp_channel};
use neopanel::geometry::PanelGeometry;

const PANEL_8X32: PanelGeometry = PanelGeometry::PANEL_8X32;

#[test]
fn blend_is_endpoint_exact() {
    let a = RGB8::new(10, 200, 0);
    let b = RGB8::new(255, 0, 33);
    assert_eq!(blend(a, b, 0.0), a);
    assert_eq!(blend(a, b, 1.0), b);
}

#[test]
fn blend_clamps_the_parameter() {
    let a = RGB8::new(10, 200, 0);
    let b = RGB8::new(255, 0, 33);
    assert_eq!(blend(a, b, -2.5), a);
    assert_eq!(blend(a, b, 7.0), b);
}

#[test]
fn lerp_channel_is_monotonic() {
    let mut previous = 0;
    for step in 0..=100 {
        let value = lerp_channel(0, 255, step as f32 / 100.0);
        assert!(value >= previous);
        previous = value;
    }
    assert_eq!(previous, 255);
}

#[test]
fn lerp_channel_runs_downhill_too() {
    assert_eq!(lerp_channel(200, 100, 0.5), 150);
    assert_eq!(lerp_channel(200, 100, 1.0), 100);
}

#[test]
fn gradient_spans_the_long_axis_horizontally() {
    let from = colors::RED;
    let to = colors::BLUE;
    let start = gradient_at(&PANEL_8X32, 0, 0, from, to, GradientMode::Horizontal);
    let end = gradient_at(&PANEL_8X32, 0, 31, from, to, GradientMode::Horizontal);
    assert_eq!(start, from);
    assert_eq!(end, to);
    // x does not matter in horizontal mode.
    assert_eq!(
        gradient_at(&PANEL_8X32, 7, 13, from, to, GradientMode::Horizontal),
        gradient_at(&PANEL_8X32, 0, 13, from, to, GradientMode::Horizontal)
    );
}

#[test]
fn gradient_spans_the_short_axis_vertically() {
    let from = colors::RED;
    let to = colors::BLUE;
    assert_eq!(
        gradient_at(&PANEL_8X32, 0, 5, from, to, GradientMode::Vertical),
        from
    );
    assert_eq!(
        gradient_at(&PANEL_8X32, 7, 5, from, to, GradientMode::Vertical),
        to
    );
}

#[test]
fn diagonal_gradient_is_endpoint_exact_at_corners() {
    let from = colors::RED;
    let to = colors::BLUE;
    assert_eq!(
        gradient_at(&PANEL_8X32, 0, 0, from, to, GradientMode::Diagonal),
        from
    );
    assert_eq!(
        gradient_at(&PANEL_8X32, 7, 31, from, to, GradientMode::Diagonal),
        to
    );
}

#[test]
fn degenerate_axis_uses_the_start_color() {
    let strip = PanelGeometry::new(1, 16, false).expect("valid dimensions");
    let from = colors::RED;
    let to = colors::BLUE;
    assert_eq!(
        gradient_at(&strip, 0, 9, from, to, GradientMode::Vertical),
        from
    );
}

#[test]
fn hsv_hits_the_primary_and_secondary_anchors() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RGB8::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), RGB8::new(255, 255, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB8::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), RGB8::new(0, 255, 255));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), RGB8::new(0, 0, 255));
    assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), RGB8::new(255, 0, 255));
}

#[test]
fn hue_wraps_in_both_directions() {
    assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
    assert_eq!(hsv_to_rgb(480.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0));
    assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
}

#[test]
fn saturation_and_value_clamp() {
    assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), RGB8::new(255, 255, 255));
    assert_eq!(hsv_to_rgb(0.0, 1.0, 0.0), RGB8::new(0, 0, 0));
    assert_eq!(hsv_to_rgb(0.0, 5.0, 5.0), hsv_to_rgb(0.0, 1.0, 1.0));
}
