use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Glow, Stroke};

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
    pub glow: Option<Glow>,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke, glow: Option<Glow>) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, stroke, glow }));
    }
}
