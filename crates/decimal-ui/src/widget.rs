use decimal_engine::coords::{Rect, Vec2};

use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every face component implements.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use decimal_ui::prelude::*;
///
/// pub struct Dot { size: f32 }
///
/// impl Widget for Dot {
///     fn measure(&self, _max_width: f32) -> Vec2 {
///         Vec2::new(self.size, self.size)
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         let accent = painter.palette.accent;
///         painter.fill_circle(rect.center(), self.size / 2.0, accent);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Size this widget wants given the available width.
    ///
    /// Must be deterministic; containers may call it more than once.
    fn measure(&self, max_width: f32) -> Vec2;

    /// Draw into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for containers.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, max_width: f32) -> Vec2 {
        self.0.measure(max_width)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
