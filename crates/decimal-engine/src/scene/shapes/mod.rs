pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod text;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// How an open stroke ends.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

/// Outline drawn along a shape's edge or path.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, cap: LineCap::Round }
    }

    #[inline]
    pub fn butt(mut self) -> Self {
        self.cap = LineCap::Butt;
        self
    }
}

/// Soft halo around a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    /// Blur radius in logical pixels.
    pub radius: f32,
    pub color: Color,
}

impl Glow {
    #[inline]
    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }
}

/// Generic font family; backends map these to concrete fonts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
}

/// Horizontal alignment of text relative to its origin.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}
