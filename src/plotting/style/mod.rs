//! Styling module.
//!
//! This module contains the style types attached to drawn shapes:
//! colors, strokes, fills and text.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod text_style;

pub use color::Color;
pub use fill_style::FillStyle;
pub use line_style::LineStyle;
pub use text_style::{TextAnchor, TextStyle};
