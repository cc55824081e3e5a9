//! Axis configuration and rendering.

use crate::plotting::element::Text;
use crate::plotting::scale::Scale;
use crate::plotting::style::{Color, LineStyle, TextAnchor, TextStyle};
use crate::plotting::surface::Shape;

/// Edge of the plot area an axis is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// Configuration for an axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Which edge the ticks hang from
    pub position: AxisPosition,
    /// Axis line style
    pub line_style: LineStyle,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Approximate number of ticks to generate
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
}

impl AxisConfig {
    /// Create a new axis configuration with defaults.
    pub fn new(position: AxisPosition) -> Self {
        let anchor = match position {
            AxisPosition::Bottom => TextAnchor::Middle,
            AxisPosition::Left => TextAnchor::End,
        };
        AxisConfig {
            position,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            tick_length: 6.0,
            tick_label_style: TextStyle::new().font_size(10.0).anchor(anchor),
            num_ticks: 10,
            tick_padding: 3.0,
        }
    }

    /// Build the axis as one group translated to `origin`: the domain line
    /// followed by one group per tick (mark + label).
    pub fn render(&self, scale: &dyn Scale, origin: (f64, f64)) -> Shape {
        let (r0, r1) = scale.range();
        let size = self.tick_length;
        let label_offset = size.max(0.0) + self.tick_padding;

        let domain_path = match self.position {
            AxisPosition::Bottom => format!("M{:.2},{:.2}V0H{:.2}V{:.2}", r0, size, r1, size),
            AxisPosition::Left => format!("M{:.2},{:.2}H0V{:.2}H{:.2}", -size, r0, r1, -size),
        };
        let mut children = vec![Shape::Path {
            d: domain_path,
            style: self.line_style.clone(),
        }];

        for tick in scale.ticks(self.num_ticks) {
            let at = scale.map(tick);
            if !at.is_finite() {
                continue;
            }
            let label = scale.tick_label(tick);
            let (translate, mark, text) = match self.position {
                AxisPosition::Bottom => (
                    (at, 0.0),
                    (0.0, size),
                    Text::new(label, 0.0, label_offset).style(self.tick_label_style.clone().dy(0.71)),
                ),
                AxisPosition::Left => (
                    (0.0, at),
                    (-size, 0.0),
                    Text::new(label, -label_offset, 0.0).style(self.tick_label_style.clone().dy(0.32)),
                ),
            };
            children.push(Shape::Group {
                translate,
                children: vec![
                    Shape::Line {
                        x1: 0.0,
                        y1: 0.0,
                        x2: mark.0,
                        y2: mark.1,
                        style: self.line_style.clone(),
                    },
                    Shape::Text(text),
                ],
            });
        }

        Shape::Group {
            translate: origin,
            children,
        }
    }
}
