//! Text element for titles, axis titles and tick labels.

use crate::plotting::style::{TextAnchor, TextStyle};

/// A text element that can be drawn on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text content
    pub content: String,
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Style configuration
    pub style: TextStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    /// Set the style for this text.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.style.anchor = anchor;
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.style.rotation = degrees;
        self
    }

    /// Generate SVG for this text element, with an optional class attribute.
    pub fn to_svg(&self, class: Option<&str>) -> String {
        let class_attr = class
            .map(|c| format!(" class=\"{}\"", c))
            .unwrap_or_default();

        format!(
            "<text{} x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>",
            class_attr,
            self.x,
            self.y,
            self.style.to_svg_attrs(),
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
