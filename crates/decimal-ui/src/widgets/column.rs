use decimal_engine::coords::{Rect, Vec2};
use decimal_engine::scene::Stroke;

use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Vertical stack with children centered horizontally.
///
/// With [`card`](Column::card) set, paints an elevated rounded panel behind
/// its children.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .padding(24.0)
///     .spacing(24.0)
///     .card(true)
///     .child(AnalogClock::new(decimal, 300.0))
///     .child(TimeComparison::new(standard, decimal))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: f32,
    card: bool,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: 0.0, card: false }
    }

    pub fn spacing(mut self, v: f32) -> Self { self.spacing = v; self }
    pub fn padding(mut self, v: f32) -> Self { self.padding = v; self }
    pub fn card(mut self, v: bool) -> Self { self.card = v; self }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    fn child_sizes(&self, max_width: f32) -> Vec<Vec2> {
        let inner = (max_width - 2.0 * self.padding).max(0.0);
        self.children.iter().map(|c| c.measure(inner)).collect()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, max_width: f32) -> Vec2 {
        let sizes = self.child_sizes(max_width);
        let gaps = sizes.len().saturating_sub(1) as f32 * self.spacing;
        let w = sizes.iter().fold(0.0f32, |w, s| w.max(s.x));
        let h = sizes.iter().map(|s| s.y).sum::<f32>() + gaps;
        Vec2::new((w + 2.0 * self.padding).min(max_width), h + 2.0 * self.padding)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.card {
            let p = painter.palette;
            painter.fill_rect(rect, 24.0, p.bg_elevated.with_opacity(0.6), Some(Stroke::new(1.0, p.border)));
        }

        let inner = rect.inset(self.padding);
        let mut y = inner.origin.y;
        for (child, size) in self.children.iter().zip(self.child_sizes(rect.size.x)) {
            child.paint(painter, inner.centered_row(y, size));
            y += size.y + self.spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use decimal_engine::scene::{DrawCmd, DrawList};
    use decimal_engine::theme::Theme;

    use super::*;

    struct Block(Vec2);

    impl Widget for Block {
        fn measure(&self, _max_width: f32) -> Vec2 {
            self.0
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            let color = painter.palette.accent;
            painter.fill_rect(rect, 0.0, color, None);
        }
    }

    #[test]
    fn stacks_and_centers_children() {
        let col = Column::new()
            .padding(10.0)
            .spacing(5.0)
            .child(Block(Vec2::new(40.0, 20.0)))
            .child(Block(Vec2::new(80.0, 30.0)));
        assert_eq!(col.measure(500.0), Vec2::new(100.0, 75.0));

        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Theme::Dark.palette());
        col.paint(&mut painter, Rect::new(0.0, 0.0, 100.0, 75.0));

        let rects: Vec<Rect> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Rect(r) => Some(r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects, vec![Rect::new(30.0, 10.0, 40.0, 20.0), Rect::new(10.0, 35.0, 80.0, 30.0)]);
    }

    #[test]
    fn card_paints_a_panel_first() {
        let col = Column::new().card(true).child(Block(Vec2::new(10.0, 10.0)));
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, Theme::Light.palette());
        col.paint(&mut painter, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(list.len(), 2);
        assert!(matches!(&list.items()[0].cmd, DrawCmd::Rect(r) if r.corner_radius == 24.0));
    }
}
