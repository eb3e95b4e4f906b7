use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::scene::shapes::CircleCmd;
use decimal_engine::scene::Stroke;

use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Day-progress ring with ten decimal-hour markers.
///
/// The arc starts at the top and fills clockwise. An optional child is
/// painted centered inside the ring.
///
/// # Example
/// ```rust,ignore
/// ProgressRing::new(decimal.percent_of_day)
///     .size(300.0)
///     .center(DigitalReadout::new(decimal).variant(ReadoutVariant::Minimal))
/// ```
pub struct ProgressRing {
    /// Progress in `[0, 100]`.
    progress: f64,
    size: f32,
    stroke_width: f32,
    center: Option<Element>,
}

impl ProgressRing {
    pub fn new(progress: f64) -> Self {
        Self { progress: progress.clamp(0.0, 100.0), size: 300.0, stroke_width: 4.0, center: None }
    }

    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }

    pub fn center(mut self, child: impl Into<Element>) -> Self {
        self.center = Some(child.into());
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        (self.size - self.stroke_width) / 2.0
    }

    #[inline]
    pub fn sweep_deg(&self) -> f32 {
        self.progress as f32 * 3.6
    }
}

impl Widget for ProgressRing {
    fn measure(&self, _max_width: f32) -> Vec2 {
        Vec2::new(self.size, self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let p = painter.palette;
        let c = rect.center();
        let r = self.radius();

        painter.circle(CircleCmd::new(c, r).stroke(Stroke::new(self.stroke_width, p.border.with_opacity(0.5))));
        painter.arc(c, r, 0.0, self.sweep_deg(), Stroke::new(self.stroke_width, p.accent), None);

        for i in 0..10 {
            let angle = i as f32 * 36.0;
            painter.line(
                c.on_dial(angle, r - 15.0),
                c.on_dial(angle, r - 8.0),
                Stroke::new(2.0, p.text_muted),
                None,
            );
        }

        if let Some(child) = &self.center {
            let size = child.measure(r * 2.0);
            let origin = Vec2::new(c.x - size.x * 0.5, c.y - size.y * 0.5);
            child.paint(painter, Rect::from_origin_size(origin, size));
        }
    }
}

#[cfg(test)]
mod tests {
    use decimal_engine::scene::{DrawCmd, DrawList};
    use decimal_engine::theme::Theme;

    use super::*;

    fn paint(ring: &ProgressRing) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Theme::Ocean.palette());
        ring.paint(&mut painter, Rect::new(0.0, 0.0, 300.0, 300.0));
        list
    }

    #[test]
    fn arc_sweep_follows_progress() {
        let list = paint(&ProgressRing::new(25.0));
        let arc = list.items().iter().find_map(|i| match &i.cmd {
            DrawCmd::Arc(a) => Some(a.clone()),
            _ => None,
        });
        let arc = arc.unwrap();
        assert_eq!(arc.radius, 148.0);
        assert_eq!(arc.start_deg, 0.0);
        assert!((arc.sweep_deg - 90.0).abs() < 1e-4);
    }

    #[test]
    fn empty_day_has_no_arc_but_keeps_markers() {
        let list = paint(&ProgressRing::new(0.0));
        assert!(!list.items().iter().any(|i| matches!(i.cmd, DrawCmd::Arc(_))));
        let markers = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count();
        assert_eq!(markers, 10);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ProgressRing::new(140.0).sweep_deg(), 360.0);
        assert_eq!(ProgressRing::new(-3.0).sweep_deg(), 0.0);
    }
}
