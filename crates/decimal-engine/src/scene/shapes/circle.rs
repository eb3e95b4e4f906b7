use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Glow, Stroke};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub glow: Option<Glow>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, fill: None, stroke: None, glow: None }
    }

    pub fn fill(mut self, color: Color) -> Self { self.fill = Some(color); self }
    pub fn stroke(mut self, stroke: Stroke) -> Self { self.stroke = Some(stroke); self }
    pub fn glow(mut self, glow: Glow) -> Self { self.glow = Some(glow); self }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, cmd: CircleCmd) {
        self.push(z, DrawCmd::Circle(cmd));
    }

    /// Records a solid disc.
    #[inline]
    pub fn push_fill_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, CircleCmd::new(center, radius).fill(color));
    }
}
