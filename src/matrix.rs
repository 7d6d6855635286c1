//! Panel controller: static text, gradient fills, pixel-art grids, and
//! frame-paced scroll and swirl animations with cooperative cancellation.
//!
//! A [`Matrix`] owns its pixel sink and clock, so every animation method
//! takes `&mut self` and at most one animation can run at a time. The
//! caller keeps the [`StopFlag`] (typically in a `static`) and shares it
//! with whatever task needs to cancel a running animation.

use embassy_time::Duration;
use portable_atomic::{AtomicBool, Ordering};
use smart_leds::{RGB8, colors};

use crate::clock::FrameClock;
use crate::color::{GradientMode, gradient_at, hsv_to_rgb};
use crate::font::{FONT_5X8, GLYPH_HEIGHT};
use crate::geometry::PanelGeometry;
use crate::grid::PixelGrid;
use crate::layout::{
    LitCell, char_index_of_column, column_stream, layout_centered, sweep_offsets, visible_columns,
};
use crate::sink::PixelSink;
use micromath::F32Ext as _;

/// Shortest frame interval an animation will pace at.
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Cooperative cancellation handle for running animations.
///
/// Animations poll the flag once per frame and return after finishing the
/// frame in progress. Starting a new animation clears any stale request,
/// so a stop aimed at a finished animation never cancels the next one.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    /// A flag with no stop requested. Usable in `static`s.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Ask the running animation to finish its current frame and return.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Forget any pending request.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// How the lit cells of a string are colored.
#[derive(Clone, Copy, Debug)]
pub enum TextStyle<'a> {
    /// One color for the whole string.
    Solid(RGB8),
    /// One color per character; the last repeats for extra characters,
    /// and an empty slice means white.
    PerChar(&'a [RGB8]),
    /// Panel-relative two-color gradient.
    Gradient {
        /// Color at the low end of the axis.
        from: RGB8,
        /// Color at the high end of the axis.
        to: RGB8,
        /// Axis the gradient runs along.
        mode: GradientMode,
    },
}

impl TextStyle<'_> {
    fn color_at(&self, geometry: &PanelGeometry, cell: LitCell) -> RGB8 {
        match *self {
            Self::Solid(color) => color,
            Self::PerChar(palette) => match palette {
                [] => colors::WHITE,
                _ => palette[usize::from(cell.char_index).min(palette.len() - 1)],
            },
            Self::Gradient { from, to, mode } => gradient_at(
                geometry,
                cell.x.into(),
                cell.y.into(),
                from,
                to,
                mode,
            ),
        }
    }
}

/// Pacing and repetition of a scroll.
#[derive(Clone, Copy, Debug)]
pub struct ScrollParams {
    /// Time per one-column step. Clamped to at least 1 ms.
    pub column_interval: Duration,
    /// Sweeps to run; negative means until stopped.
    pub loops: i32,
    /// Pause between sweeps.
    pub gap: Duration,
}

impl ScrollParams {
    /// A single sweep at `column_interval` with no gap.
    #[must_use]
    pub const fn once(column_interval: Duration) -> Self {
        Self {
            column_interval,
            loops: 1,
            gap: Duration::from_millis(0),
        }
    }
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self::once(Duration::from_millis(40))
    }
}

/// Pacing and motion of a swirl animation.
#[derive(Clone, Copy, Debug)]
pub struct SwirlParams {
    /// Time per frame. Clamped to at least 1 ms.
    pub frame_interval: Duration,
    /// Total run time; at least one frame always renders.
    pub duration: Duration,
    /// Hue rotation in degrees per second.
    pub hue_speed: f32,
    /// Hue degrees added per cell of distance from the panel center.
    pub distance_scale: f32,
}

impl Default for SwirlParams {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(40),
            duration: Duration::from_millis(3000),
            hue_speed: 120.0,
            distance_scale: 10.0,
        }
    }
}

/// Text and animation engine for one LED panel.
///
/// `sink` may be `None`, in which case every drawing operation is a no-op
/// and animations still pace through their frames. This keeps application
/// logic runnable when the panel is absent or failed to initialize.
#[derive(Debug)]
pub struct Matrix<'a, Sink, Clock> {
    geometry: PanelGeometry,
    sink: Option<Sink>,
    clock: Clock,
    stop: &'a StopFlag,
}

impl<'a, Sink, Clock> Matrix<'a, Sink, Clock>
where
    Sink: PixelSink,
    Clock: FrameClock,
{
    /// Create a matrix over `sink`, never failing.
    #[must_use]
    pub fn new(geometry: PanelGeometry, sink: Option<Sink>, clock: Clock, stop: &'a StopFlag) -> Self {
        Self {
            geometry,
            sink,
            clock,
            stop,
        }
    }

    /// Panel geometry this matrix renders to.
    #[must_use]
    pub const fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// The sink, if one is attached.
    #[must_use]
    pub fn sink(&self) -> Option<&Sink> {
        self.sink.as_ref()
    }

    /// Give back the sink, consuming the matrix.
    #[must_use]
    pub fn into_sink(self) -> Option<Sink> {
        self.sink
    }

    /// The clock driving frame pacing.
    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Set global brightness and present immediately.
    pub fn set_brightness(&mut self, brightness: u8) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_brightness(brightness);
            sink.present();
        }
    }

    /// Blank the panel.
    pub fn clear(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.clear();
            sink.present();
        }
    }

    /// Show `text` centered, one color.
    pub fn show_text(&mut self, text: &str, color: RGB8) {
        self.show_text_styled(text, &TextStyle::Solid(color));
    }

    /// Show `text` centered, one color per character. The last color
    /// repeats for extra characters; an empty palette means white.
    pub fn show_text_colors(&mut self, text: &str, palette: &[RGB8]) {
        self.show_text_styled(text, &TextStyle::PerChar(palette));
    }

    /// Show `text` centered, colored by a panel-relative gradient.
    pub fn show_text_gradient(&mut self, text: &str, from: RGB8, to: RGB8, mode: GradientMode) {
        self.show_text_styled(text, &TextStyle::Gradient { from, to, mode });
    }

    /// Show `text` centered with any [`TextStyle`].
    pub fn show_text_styled(&mut self, text: &str, style: &TextStyle<'_>) {
        let geometry = self.geometry;
        let cells = layout_centered(&geometry, &FONT_5X8, text);
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        sink.clear();
        for &cell in &cells {
            if let Some(index) = geometry.index(cell.x.into(), cell.y.into()) {
                sink.set_pixel(index, style.color_at(&geometry, cell));
            }
        }
        sink.present();
    }

    /// Fill every cell with a two-color gradient.
    pub fn fill_gradient(&mut self, from: RGB8, to: RGB8, mode: GradientMode) {
        let geometry = self.geometry;
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        for y in 0..geometry.height() {
            for x in 0..geometry.width() {
                if let Some(index) = geometry.index(x as i32, y as i32) {
                    sink.set_pixel(index, gradient_at(&geometry, x, y, from, to, mode));
                }
            }
        }
        sink.present();
    }

    /// Draw a pixel-art grid anchored at the panel origin. Cells past the
    /// panel edge are dropped; cells the grid does not cover are blanked.
    pub fn draw_grid(&mut self, grid: &PixelGrid) {
        let geometry = self.geometry;
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        sink.clear();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let Some(index) = geometry.index(x as i32, y as i32) {
                    sink.set_pixel(index, grid.get(x, y));
                }
            }
        }
        sink.present();
    }

    /// Scroll `text` across the panel once in one color.
    pub async fn scroll_once(&mut self, text: &str, color: RGB8, column_interval: Duration) {
        self.scroll(text, &TextStyle::Solid(color), ScrollParams::once(column_interval))
            .await;
    }

    /// Scroll `text` once, one color per character.
    pub async fn scroll_once_colors(
        &mut self,
        text: &str,
        palette: &[RGB8],
        column_interval: Duration,
    ) {
        self.scroll(text, &TextStyle::PerChar(palette), ScrollParams::once(column_interval))
            .await;
    }

    /// Scroll `text` once, colored by a panel-relative gradient.
    pub async fn scroll_once_gradient(
        &mut self,
        text: &str,
        from: RGB8,
        to: RGB8,
        mode: GradientMode,
        column_interval: Duration,
    ) {
        self.scroll(
            text,
            &TextStyle::Gradient { from, to, mode },
            ScrollParams::once(column_interval),
        )
        .await;
    }

    /// Scroll `text` repeatedly in one color, per `params`.
    pub async fn scroll_loop(&mut self, text: &str, color: RGB8, params: ScrollParams) {
        self.scroll(text, &TextStyle::Solid(color), params).await;
    }

    /// Scroll `text` repeatedly, one color per character.
    pub async fn scroll_loop_colors(&mut self, text: &str, palette: &[RGB8], params: ScrollParams) {
        self.scroll(text, &TextStyle::PerChar(palette), params).await;
    }

    /// Scroll `text` repeatedly, colored by a panel-relative gradient.
    pub async fn scroll_loop_gradient(
        &mut self,
        text: &str,
        from: RGB8,
        to: RGB8,
        mode: GradientMode,
        params: ScrollParams,
    ) {
        self.scroll(text, &TextStyle::Gradient { from, to, mode }, params)
            .await;
    }

    /// Scroll `text` along the height axis with any [`TextStyle`].
    ///
    /// Each sweep enters from the high edge and runs until only the last
    /// column sits at position 0. The stop flag is polled once per frame
    /// and once after each inter-sweep gap; a request takes effect after
    /// the frame in progress and leaves the panel blanked.
    pub async fn scroll(&mut self, text: &str, style: &TextStyle<'_>, params: ScrollParams) {
        self.stop.clear();
        let interval = params.column_interval.max(MIN_FRAME_INTERVAL);
        let stream = column_stream(&FONT_5X8, text);
        if stream.is_empty() {
            return;
        }
        info!("scroll: {} columns, {} loops", stream.len(), params.loops);

        let mut completed: i32 = 0;
        while params.loops < 0 || completed < params.loops {
            if !self.run_sweep(&stream, style, interval).await {
                return;
            }
            completed += 1;
            let more = params.loops < 0 || completed < params.loops;
            if more && params.gap > Duration::from_ticks(0) {
                self.clock.sleep(params.gap).await;
                if self.stop.is_requested() {
                    self.blank();
                    return;
                }
            }
        }
        debug!("scroll: {} sweeps done", completed);
    }

    /// One full sweep. Returns false when stopped early.
    async fn run_sweep(&mut self, stream: &[u8], style: &TextStyle<'_>, interval: Duration) -> bool {
        let geometry = self.geometry;
        for offset in sweep_offsets(geometry.height(), stream.len()) {
            if self.stop.is_requested() {
                self.blank();
                return false;
            }
            self.render_scroll_frame(stream, offset, style);
            self.clock.sleep(interval).await;
        }
        true
    }

    fn render_scroll_frame(&mut self, stream: &[u8], offset: i32, style: &TextStyle<'_>) {
        let geometry = self.geometry;
        let x0 = (geometry.width() as i32 - GLYPH_HEIGHT as i32).div_euclid(2);
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        sink.clear();
        for (y, column) in visible_columns(offset, stream.len(), geometry.height()) {
            let bits = stream[column];
            for bit in 0..GLYPH_HEIGHT as i32 {
                if bits >> bit & 1 == 0 {
                    continue;
                }
                let x = x0 + bit;
                if !(0..geometry.width() as i32).contains(&x) {
                    continue;
                }
                let cell = LitCell {
                    x: x as u8,
                    y: y as u8,
                    char_index: char_index_of_column(column) as u8,
                };
                if let Some(index) = geometry.index(x, y as i32) {
                    sink.set_pixel(index, style.color_at(&geometry, cell));
                }
            }
        }
        sink.present();
    }

    /// Animate `text` centered, each lit cell hued by its angle and
    /// distance from the panel center plus a rotation that advances with
    /// time. Runs for `params.duration`, at least one frame, and honors
    /// the stop flag once per frame.
    pub async fn swirl_text(&mut self, text: &str, params: SwirlParams) {
        self.stop.clear();
        let interval = params.frame_interval.max(MIN_FRAME_INTERVAL);
        let frames = (params.duration.as_millis() / interval.as_millis()).max(1);
        let geometry = self.geometry;
        let cells = layout_centered(&geometry, &FONT_5X8, text);
        info!("swirl: {} frames", frames);

        let center_x = (geometry.width() as f32 - 1.0) / 2.0;
        let center_y = (geometry.height() as f32 - 1.0) / 2.0;
        for frame in 0..frames {
            if self.stop.is_requested() {
                self.blank();
                return;
            }
            let t = frame as f32 * interval.as_millis() as f32 / 1000.0;
            if let Some(sink) = self.sink.as_mut() {
                sink.clear();
                for &cell in &cells {
                    let dx = f32::from(cell.x) - center_x;
                    let dy = f32::from(cell.y) - center_y;
                    let angle = dy.atan2(dx) * 180.0 / core::f32::consts::PI;
                    let distance = (dx * dx + dy * dy).sqrt();
                    let hue = angle + t * params.hue_speed + distance * params.distance_scale;
                    if let Some(index) = geometry.index(cell.x.into(), cell.y.into()) {
                        sink.set_pixel(index, hsv_to_rgb(hue, 1.0, 1.0));
                    }
                }
                sink.present();
            }
            self.clock.sleep(interval).await;
        }
        self.blank();
    }

    fn blank(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.clear();
            sink.present();
        }
    }
}
