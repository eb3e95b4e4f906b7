use std::fmt;
use std::str::FromStr;

use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::scene::DrawList;
use decimal_engine::theme::Palette;
use decimal_time::{DecimalTime, StandardTime};

use crate::layout::responsive_clock_size;
use crate::painter::Painter;
use crate::widget::Element;
use crate::widgets::analog_clock::AnalogClock;
use crate::widgets::column::Column;
use crate::widgets::digital_readout::{DigitalReadout, ReadoutVariant};
use crate::widgets::progress_ring::ProgressRing;
use crate::widgets::text::{Label, Tone};
use crate::widgets::time_comparison::TimeComparison;

/// Caption under the clock card.
pub const INFO_TEXT: &str = "10h • 100m • 100s";

/// Padding kept between the card and the viewport edge.
const VIEWPORT_PADDING: f32 = 24.0;

// ── FaceStyle ─────────────────────────────────────────────────────────────

/// Which clock is drawn in the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceStyle {
    /// Full analog face with hands, ticks and numerals.
    #[default]
    Analog,
    /// Progress ring around a large digital readout.
    Minimal,
}

impl FaceStyle {
    pub const fn id(self) -> &'static str {
        match self {
            FaceStyle::Analog => "analog",
            FaceStyle::Minimal => "minimal",
        }
    }
}

impl fmt::Display for FaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FaceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analog" => Ok(FaceStyle::Analog),
            "minimal" => Ok(FaceStyle::Minimal),
            other => Err(format!("unknown face style {other:?} (expected analog or minimal)")),
        }
    }
}

// ── FaceConfig ────────────────────────────────────────────────────────────

/// Output surface and options for one rendered face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
    pub style: FaceStyle,
    /// Small readout inside the analog face.
    pub show_digital: bool,
}

impl FaceConfig {
    #[inline]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Diameter the clock will be drawn at.
    #[inline]
    pub fn clock_size(&self) -> f32 {
        responsive_clock_size(self.viewport())
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self { width: 480.0, height: 800.0, style: FaceStyle::Analog, show_digital: true }
    }
}

// ── FaceScene ─────────────────────────────────────────────────────────────

/// Owns the draw list a face is recorded into, reused across frames.
///
/// # Example
/// ```rust,ignore
/// let mut scene = FaceScene::new();
/// let root = build_face(&snapshot.standard, &snapshot.decimal, &config);
/// let list = scene.frame(&root, config.viewport(), Theme::Dark.palette());
/// let svg = render_svg(list, config.viewport());
/// ```
#[derive(Debug, Default)]
pub struct FaceScene {
    pub draw_list: DrawList,
}

impl FaceScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame: background fill, then `root` centered in the viewport.
    pub fn frame(&mut self, root: &Element, viewport: Vec2, palette: Palette) -> &mut DrawList {
        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list, palette);
        painter.fill_rect(Rect::from_origin_size(Vec2::zero(), viewport), 0.0, palette.bg_primary, None);

        let size = root.measure((viewport.x - 2.0 * VIEWPORT_PADDING).max(0.0));
        let origin = Vec2::new(
            ((viewport.x - size.x) * 0.5).max(0.0),
            ((viewport.y - size.y) * 0.5).max(0.0),
        );
        root.paint(&mut painter, Rect::from_origin_size(origin, size));
        &mut self.draw_list
    }
}

/// Builds the widget tree for the clock card.
pub fn build_face(standard: &StandardTime, decimal: &DecimalTime, config: &FaceConfig) -> Element {
    let size = config.clock_size();
    let clock: Element = match config.style {
        FaceStyle::Analog => AnalogClock::new(*decimal, size).show_digital(config.show_digital).into(),
        FaceStyle::Minimal => ProgressRing::new(decimal.percent_of_day)
            .size(size)
            .center(
                DigitalReadout::new(*decimal)
                    .variant(ReadoutVariant::Minimal)
                    .size(size * 0.16)
                    .show_centiseconds(true),
            )
            .into(),
    };

    Column::new()
        .card(true)
        .padding(24.0)
        .spacing(24.0)
        .child(clock)
        .child(TimeComparison::new(*standard, *decimal))
        .child(Label::new(INFO_TEXT, 12.0).tone(Tone::Muted).letter_spacing(0.05))
        .into()
}

/// One-shot helper: builds and records a face into a fresh draw list.
pub fn render_face(
    standard: &StandardTime,
    decimal: &DecimalTime,
    palette: Palette,
    config: &FaceConfig,
) -> DrawList {
    let mut scene = FaceScene::new();
    let root = build_face(standard, decimal, config);
    scene.frame(&root, config.viewport(), palette);
    scene.draw_list
}
