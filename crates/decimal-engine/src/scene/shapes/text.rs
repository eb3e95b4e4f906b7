use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{FontFamily, TextAnchor};

/// Single-line text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Anchor point; text is vertically centered on it.
    pub origin: Vec2,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub family: FontFamily,
    pub weight: u16,
    pub anchor: TextAnchor,
    /// Extra spacing between glyphs, in em.
    pub letter_spacing: f32,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, origin: Vec2, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            size,
            color,
            family: FontFamily::Sans,
            weight: 400,
            anchor: TextAnchor::Middle,
            letter_spacing: 0.0,
        }
    }

    pub fn family(mut self, v: FontFamily) -> Self { self.family = v; self }
    pub fn weight(mut self, v: u16) -> Self { self.weight = v; self }
    pub fn anchor(mut self, v: TextAnchor) -> Self { self.anchor = v; self }
    pub fn letter_spacing(mut self, v: f32) -> Self { self.letter_spacing = v; self }
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        self.push(z, DrawCmd::Text(cmd));
    }
}
