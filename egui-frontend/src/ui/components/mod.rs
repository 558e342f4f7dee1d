//! # UI Components Module
//!
//! The visual building blocks of the app.
//!
//! ## Module Organization:
//! - `styling` - window style and card container drawing
//! - `theme` - centralized colors
//! - `water_chart` - the animated water-use chart itself

pub mod styling;
pub mod theme;
pub mod water_chart;

pub use styling::{draw_card_background, setup_chart_style};
pub use theme::*;
