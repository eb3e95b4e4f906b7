use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::paint::Color;
use decimal_engine::scene::shapes::TextCmd;
use decimal_engine::scene::FontFamily;
use decimal_engine::theme::Palette;

use crate::painter::Painter;
use crate::widget::Widget;

/// Average glyph advance of a monospace face, in em.
pub const MONO_ADVANCE: f32 = 0.6;
/// Average glyph advance of a proportional face, in em.
pub const SANS_ADVANCE: f32 = 0.55;

/// Width estimate for a single line of text.
///
/// There is no font system at layout time; output backends shape the text
/// themselves, so this only needs to be close enough for centering.
pub fn estimate_width(text: &str, size: f32, family: FontFamily, letter_spacing: f32) -> f32 {
    let advance = match family {
        FontFamily::Mono => MONO_ADVANCE,
        FontFamily::Sans => SANS_ADVANCE,
    };
    text.chars().count() as f32 * size * (advance + letter_spacing)
}

/// Palette slot a piece of text is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Muted,
    Accent,
}

impl Tone {
    pub fn resolve(self, palette: &Palette) -> Color {
        match self {
            Tone::Primary => palette.text_primary,
            Tone::Secondary => palette.text_secondary,
            Tone::Muted => palette.text_muted,
            Tone::Accent => palette.accent,
        }
    }
}

/// A single centered line of text.
///
/// # Example
/// ```rust,ignore
/// Label::new("10h • 100m • 100s", 12.0).tone(Tone::Muted)
/// ```
pub struct Label {
    pub text: String,
    pub size: f32,
    tone: Tone,
    opacity: f32,
    family: FontFamily,
    weight: u16,
    letter_spacing: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            tone: Tone::Primary,
            opacity: 1.0,
            family: FontFamily::Sans,
            weight: 400,
            letter_spacing: 0.0,
        }
    }

    pub fn tone(mut self, v: Tone) -> Self { self.tone = v; self }
    pub fn opacity(mut self, v: f32) -> Self { self.opacity = v; self }
    pub fn mono(mut self) -> Self { self.family = FontFamily::Mono; self }
    pub fn weight(mut self, v: u16) -> Self { self.weight = v; self }
    pub fn letter_spacing(mut self, v: f32) -> Self { self.letter_spacing = v; self }
}

impl Widget for Label {
    fn measure(&self, max_width: f32) -> Vec2 {
        let w = estimate_width(&self.text, self.size, self.family, self.letter_spacing);
        Vec2::new(w.min(max_width), self.size * 1.4)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let color = self.tone.resolve(&painter.palette).with_opacity(self.opacity);
        painter.text(
            TextCmd::new(self.text.clone(), rect.center(), self.size, color)
                .family(self.family)
                .weight(self.weight)
                .letter_spacing(self.letter_spacing),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_is_wider_than_sans() {
        let mono = estimate_width("12:34:56", 10.0, FontFamily::Mono, 0.0);
        let sans = estimate_width("12:34:56", 10.0, FontFamily::Sans, 0.0);
        assert!((mono - 48.0).abs() < 1e-3);
        assert!(mono > sans);
    }

    #[test]
    fn label_measure_respects_max_width() {
        let label = Label::new("a fairly long caption", 20.0);
        assert_eq!(label.measure(50.0).x, 50.0);
        assert!((label.measure(50.0).y - 28.0).abs() < 1e-3);
    }
}
