use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::paint::Color;
use decimal_engine::scene::shapes::{CircleCmd, TextCmd};
use decimal_engine::scene::{DrawList, Glow, Stroke, ZIndex};
use decimal_engine::theme::Palette;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and carries the
/// active palette so widgets never hard-code theme colors. Every call lands
/// on top of everything painted before it.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
    pub palette: Palette,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, palette: Palette) -> Self {
        Self { draw_list, z: 0, palette }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rectangle with optional rounded corners and outline.
    pub fn fill_rect(&mut self, rect: Rect, corner_radius: f32, fill: Color, stroke: Option<Stroke>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, corner_radius, fill, stroke);
    }

    /// Solid disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_circle(z, center, radius, color);
    }

    /// Circle with any combination of fill, outline and glow.
    pub fn circle(&mut self, cmd: CircleCmd) {
        let z = self.next_z();
        self.draw_list.push_circle(z, cmd);
    }

    /// Straight segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke, glow: Option<Glow>) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, stroke, glow);
    }

    /// Clockwise arc starting at `start_deg` (0° = top).
    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke: Stroke,
        glow: Option<Glow>,
    ) {
        let z = self.next_z();
        self.draw_list.push_arc(z, center, radius, start_deg, sweep_deg, stroke, glow);
    }

    /// Single line of text centered vertically on `cmd.origin`.
    pub fn text(&mut self, cmd: TextCmd) {
        let z = self.next_z();
        self.draw_list.push_text(z, cmd);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
