//! Scatter plot implementation.

use crate::plotting::data::DataSource;
use crate::plotting::graph::Projection;
use crate::plotting::plot::Plot;
use crate::plotting::style::FillStyle;
use crate::plotting::surface::Shape;

pub const POINT_CLASS: &str = "ev-point";

/// A scatter plot showing individual data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    /// Marker radius in pixels
    pub point_radius: f64,
}

impl ScatterPlot {
    /// Create a new scatter plot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker radius.
    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// One circle per projectable point, filled with its series color.
    pub fn render_points(&self, projection: &Projection, source: &DataSource) -> Vec<Shape> {
        source
            .series()
            .iter()
            .flat_map(|series| {
                let fill = FillStyle::new(series.color.clone());
                series.points.iter().filter_map(move |p| {
                    let (cx, cy) = projection.project(p)?;
                    Some(Shape::Circle {
                        cx,
                        cy,
                        r: self.point_radius,
                        fill: fill.clone(),
                    })
                })
            })
            .collect()
    }
}

impl Default for ScatterPlot {
    fn default() -> Self {
        ScatterPlot { point_radius: 3.5 }
    }
}

impl Plot for ScatterPlot {
    fn class(&self) -> &'static str {
        POINT_CLASS
    }

    fn shapes(&self, projection: &Projection, source: &DataSource) -> Vec<Shape> {
        self.render_points(projection, source)
    }
}
