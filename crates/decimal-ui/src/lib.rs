//! Decimal clock face: widgets on top of `decimal-engine`, with SVG and PNG
//! output.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use decimal_ui::prelude::*;
//!
//! let snapshot = ticker.latest();
//! let config = FaceConfig::default();
//! let mut list = render_face(&snapshot.standard, &snapshot.decimal, Theme::Dark.palette(), &config);
//! let svg = render_svg(&mut list, config.viewport());
//! let png = rasterize_png(&svg, 2.0)?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type, then use it anywhere an
//! [`widget::Element`] is accepted, e.g. as a [`widgets::column::Column`] child.

pub mod layout;
pub mod painter;
pub mod raster;
pub mod scene;
pub mod svg;
pub mod widget;
pub mod widgets;

/// Everything needed to build and render a face.
pub mod prelude {
    pub use crate::layout::{responsive_clock_size, FaceLayout};
    pub use crate::painter::Painter;
    pub use crate::raster::rasterize_png;
    pub use crate::scene::{build_face, render_face, FaceConfig, FaceScene, FaceStyle};
    pub use crate::svg::render_svg;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        analog_clock::AnalogClock,
        column::Column,
        digital_readout::{DigitalReadout, ReadoutVariant},
        progress_ring::ProgressRing,
        text::{Label, Tone},
        time_comparison::TimeComparison,
    };

    pub use decimal_engine::coords::{Rect, Vec2};
    pub use decimal_engine::paint::Color;
    pub use decimal_engine::theme::{Palette, Theme};
}
