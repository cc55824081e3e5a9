//! Reusable chart components (line plot, scatter plot, axis-labeled graph
//! and a resizable container) rendering to a retained SVG scene.

pub mod config;
pub mod plotting;
