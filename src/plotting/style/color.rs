//! Color definitions and utilities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a color for chart elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named CSS color (e.g., "steelblue")
    Named(String),
}

impl Color {
    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => name.clone(),
        }
    }

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
}

/// Series without an explicit color are drawn in black.
impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_svg_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#abc"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
    }

    #[test]
    fn test_named_colors_pass_through() {
        assert_eq!(Color::from("steelblue").to_svg_string(), "steelblue");
        assert_eq!(Color::from("#000000"), Color::BLACK);
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_serde_as_string() {
        let c: Color = serde_json::from_str("\"#80808080\"").unwrap();
        assert_eq!(c.to_svg_string(), format!("rgba(128,128,128,{})", 128.0 / 255.0));
        assert_eq!(serde_json::to_string(&Color::BLACK).unwrap(), "\"rgb(0,0,0)\"");
    }
}
