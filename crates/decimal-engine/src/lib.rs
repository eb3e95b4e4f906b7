//! Decimal clock engine crate.
//!
//! This crate owns the host clock, the refresh ticker, theme state and the
//! renderer-agnostic draw list used by higher layers.

pub mod time;
pub mod theme;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
