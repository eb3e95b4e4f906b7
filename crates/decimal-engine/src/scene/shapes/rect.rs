use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Axis-aligned, optionally rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub corner_radius: f32,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    /// Records a rectangle. `corner_radius = 0.0` gives sharp corners.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, corner_radius: f32, fill: Color, stroke: Option<Stroke>) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, corner_radius, fill, stroke }));
    }
}
