//! Legend configuration and rendering.

use crate::plotting::data::DataSeries;
use crate::plotting::element::{Bounds, Text};
use crate::plotting::style::{FillStyle, TextStyle};
use crate::plotting::surface::Shape;

/// Legend drawn as a single row of entries inside the bottom margin band.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Text style for labels
    pub text_style: TextStyle,
    /// Side length of the color swatch
    pub swatch_size: f64,
    /// Gap between swatch and label
    pub label_gap: f64,
    /// Horizontal space allotted to each entry
    pub entry_width: f64,
}

impl Legend {
    /// One group per series: a swatch in the series color and its label.
    ///
    /// Entries are laid out left to right starting at the band's left edge
    /// and vertically centered in it. Unlabeled series are listed by index.
    pub fn render(&self, series: &[DataSeries], band: &Bounds) -> Vec<Shape> {
        let (_, cy) = band.center();
        series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let label = if s.label.is_empty() {
                    format!("Series {}", i + 1)
                } else {
                    s.label.clone()
                };
                Shape::Group {
                    translate: (band.x_min + i as f64 * self.entry_width, cy),
                    children: vec![
                        Shape::Rect {
                            x: 0.0,
                            y: -self.swatch_size / 2.0,
                            width: self.swatch_size,
                            height: self.swatch_size,
                            fill: FillStyle::new(s.color.clone()),
                        },
                        Shape::Text(
                            Text::new(label, self.swatch_size + self.label_gap, 0.0)
                                .style(self.text_style.clone().dy(0.32)),
                        ),
                    ],
                }
            })
            .collect()
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            text_style: TextStyle::new().font_size(10.0),
            swatch_size: 10.0,
            label_gap: 6.0,
            entry_width: 100.0,
        }
    }
}
