//! Output backends for the drawing surface.

pub mod svg;

pub use svg::SvgBackend;
