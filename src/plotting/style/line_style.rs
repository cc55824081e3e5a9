//! Stroke styling for paths and lines.

use super::color::Color;

/// Stroke of an unfilled shape: axis domain lines, tick marks, plot outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// SVG presentation attributes. Strokes never fill.
    pub fn to_svg_style(&self) -> String {
        format!(
            "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
            self.color.to_svg_string(),
            self.width
        )
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_style() {
        let style = LineStyle::new().color("#ff0000").width(2.0);
        assert_eq!(
            style.to_svg_style(),
            "stroke=\"rgb(255,0,0)\" stroke-width=\"2\" fill=\"none\""
        );
    }
}
