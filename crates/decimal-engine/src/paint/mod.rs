//! Paint model shared between the theme, UI and output backends.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
