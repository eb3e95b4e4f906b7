use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Glow, Stroke};

/// Stroked circular arc.
///
/// Angles are dial angles: 0° at the top, clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    /// Clockwise sweep in degrees, clamped to `[0, 360]` on push.
    pub sweep_deg: f32,
    pub stroke: Stroke,
    pub glow: Option<Glow>,
}

impl ArcCmd {
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.center.on_dial(self.start_deg + self.sweep_deg, self.radius)
    }
}

impl DrawList {
    /// Records an arc. Empty sweeps are dropped.
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke: Stroke,
        glow: Option<Glow>,
    ) {
        let sweep_deg = sweep_deg.clamp(0.0, 360.0);
        if sweep_deg <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Arc(ArcCmd { center, radius, start_deg, sweep_deg, stroke, glow }));
    }
}
