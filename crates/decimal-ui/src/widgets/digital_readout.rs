use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::paint::Color;
use decimal_engine::scene::shapes::TextCmd;
use decimal_engine::scene::{FontFamily, TextAnchor};
use decimal_engine::theme::{Palette, Theme};
use decimal_time::{centiseconds, DecimalTime};

use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::text::{estimate_width, MONO_ADVANCE};

/// One differently-colored run inside a monospace line.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    color: Color,
}

impl Segment {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self { text: text.into(), color }
    }
}

/// Paints `segments` as one monospace line centered on `center`.
///
/// Glyphs are laid out on a fixed advance so every run lines up as if it
/// were a single string with tabular digits.
fn paint_mono_line(
    painter: &mut Painter,
    center: Vec2,
    size: f32,
    weight: u16,
    letter_spacing: f32,
    segments: &[Segment],
) {
    let advance = size * (MONO_ADVANCE + letter_spacing);
    let chars: usize = segments.iter().map(|s| s.text.chars().count()).sum();
    let mut x = center.x - chars as f32 * advance * 0.5;
    for seg in segments {
        painter.text(
            TextCmd::new(seg.text.clone(), Vec2::new(x, center.y), size, seg.color)
                .family(FontFamily::Mono)
                .weight(weight)
                .anchor(TextAnchor::Start)
                .letter_spacing(letter_spacing),
        );
        x += seg.text.chars().count() as f32 * advance;
    }
}

const DIGIT_SPACING: f32 = 0.02;
const CAPTION: &str = "DECIMAL";
const CAPTION_SPACING: f32 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadoutVariant {
    /// Digits with a small uppercase caption underneath.
    #[default]
    Default,
    /// Digits only.
    Minimal,
}

/// `H:MM:SS` decimal readout.
///
/// Hours are brightest, separators faintest and seconds dimmed. Optionally
/// appends `.CC`, the hundredths of the current decimal second.
pub struct DigitalReadout {
    time: DecimalTime,
    variant: ReadoutVariant,
    size: f32,
    show_centiseconds: bool,
}

impl DigitalReadout {
    pub fn new(time: DecimalTime) -> Self {
        Self {
            time,
            variant: ReadoutVariant::Default,
            size: 48.0,
            show_centiseconds: false,
        }
    }

    pub fn variant(mut self, v: ReadoutVariant) -> Self { self.variant = v; self }
    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn show_centiseconds(mut self, v: bool) -> Self { self.show_centiseconds = v; self }

    fn caption_size(&self) -> f32 {
        (self.size * 0.5).clamp(8.0, 12.0)
    }

    fn has_caption(&self) -> bool {
        self.variant == ReadoutVariant::Default
    }

    fn segments(&self, palette: &Palette) -> Vec<Segment> {
        let t = &self.time;
        let digits = palette.text_secondary.with_opacity(0.85);
        let separator = digits.with_opacity(0.4);
        let mut segs = vec![
            Segment::new(t.hours.to_string(), palette.text_primary.with_opacity(0.85)),
            Segment::new(":", separator),
            Segment::new(format!("{:02}", t.minutes), digits),
            Segment::new(":", separator),
            Segment::new(format!("{:02}", t.whole_seconds()), digits.with_opacity(0.6)),
        ];
        if self.show_centiseconds {
            segs.push(Segment::new(format!(".{:02}", centiseconds(t)), palette.text_muted));
        }
        segs
    }
}

impl Widget for DigitalReadout {
    fn measure(&self, max_width: f32) -> Vec2 {
        // Colors don't affect width.
        let chars: String = self.segments(&Theme::Dark.palette()).into_iter().map(|s| s.text).collect();
        let mut w = estimate_width(&chars, self.size, FontFamily::Mono, DIGIT_SPACING);
        let mut h = self.size * 1.2;
        if self.has_caption() {
            let cs = self.caption_size();
            w = w.max(estimate_width(CAPTION, cs, FontFamily::Sans, CAPTION_SPACING));
            h += cs * 1.2;
        }
        Vec2::new(w.min(max_width), h)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let p = painter.palette;
        let digits_center = Vec2::new(rect.center().x, rect.origin.y + self.size * 0.6);
        let segments = self.segments(&p);
        paint_mono_line(painter, digits_center, self.size, 300, DIGIT_SPACING, &segments);

        if self.has_caption() {
            let cs = self.caption_size();
            let y = rect.origin.y + self.size * 1.2 + cs * 0.5;
            painter.text(
                TextCmd::new(CAPTION, Vec2::new(rect.center().x, y), cs, p.text_muted.with_opacity(0.5))
                    .weight(600)
                    .letter_spacing(CAPTION_SPACING),
            );
        }
    }
}
