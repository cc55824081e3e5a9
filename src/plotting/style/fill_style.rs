//! Fill styling for markers and legend swatches.

use super::color::Color;

/// Fill of a closed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle { color: color.into() }
    }

    pub fn to_svg_style(&self) -> String {
        format!("fill=\"{}\"", self.color.to_svg_string())
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::new(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_attribute() {
        assert_eq!(FillStyle::default().to_svg_style(), "fill=\"rgb(0,0,0)\"");
        assert_eq!(FillStyle::new("steelblue").to_svg_style(), "fill=\"steelblue\"");
    }
}
