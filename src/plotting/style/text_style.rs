//! Text styling options.

use super::color::Color;

/// Text anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    /// Anchor at the middle
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family (e.g., "Arial", "sans-serif")
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Text color
    pub color: Color,
    /// Horizontal anchor
    pub anchor: TextAnchor,
    /// Baseline shift in em units (SVG `dy`)
    pub dy: Option<f64>,
    /// Rotation angle in degrees, applied around the origin
    pub rotation: f64,
}

impl TextStyle {
    /// Create a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the baseline shift in em units.
    pub fn dy(mut self, em: f64) -> Self {
        self.dy = Some(em);
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Generate SVG attributes (excluding position).
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
            format!("fill=\"{}\"", self.color.to_svg_string()),
            format!("text-anchor=\"{}\"", self.anchor.to_svg_string()),
        ];

        if let Some(dy) = self.dy {
            attrs.push(format!("dy=\"{}em\"", dy));
        }
        if self.rotation != 0.0 {
            attrs.push(format!("transform=\"rotate({})\"", self.rotation));
        }

        attrs.join(" ")
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            dy: None,
            rotation: 0.0,
        }
    }
}
