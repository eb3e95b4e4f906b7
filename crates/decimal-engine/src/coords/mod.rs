//! Coordinate and geometry types shared by the scene and the UI.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Dial angles in degrees, 0 at 12 o'clock, increasing clockwise

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
