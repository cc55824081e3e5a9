//! Line plot implementation.

use std::fmt::Write as _;

use crate::plotting::data::DataSource;
use crate::plotting::graph::Projection;
use crate::plotting::plot::Plot;
use crate::plotting::style::LineStyle;
use crate::plotting::surface::Shape;

pub const LINE_CLASS: &str = "ev-line";

/// A line plot drawing one outline per series.
#[derive(Debug, Clone)]
pub struct LinePlot {
    /// Connect points in ascending x order instead of source order
    pub sort: bool,
    /// Stroke width of each outline
    pub line_width: f64,
}

impl LinePlot {
    /// Create a new line plot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether vertices are ordered by x.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// One path per series, stroked in the series color.
    ///
    /// Sorting works on a copy of the projected vertices and is stable for
    /// equal x values; the source is never reordered.
    pub fn render_path(&self, projection: &Projection, source: &DataSource) -> Vec<Shape> {
        source
            .series()
            .iter()
            .filter_map(|series| {
                let mut vertices: Vec<(f64, (f64, f64))> = series
                    .points
                    .iter()
                    .filter_map(|p| Some((projection.x_value(p)?, projection.project(p)?)))
                    .collect();
                if vertices.is_empty() {
                    return None;
                }
                if self.sort {
                    vertices.sort_by(|a, b| a.0.total_cmp(&b.0));
                }
                Some(Shape::Path {
                    d: path_data(vertices.into_iter().map(|(_, px)| px)),
                    style: LineStyle::new()
                        .color(series.color.clone())
                        .width(self.line_width),
                })
            })
            .collect()
    }
}

impl Default for LinePlot {
    fn default() -> Self {
        LinePlot {
            sort: false,
            line_width: 2.0,
        }
    }
}

impl Plot for LinePlot {
    fn class(&self) -> &'static str {
        LINE_CLASS
    }

    fn shapes(&self, projection: &Projection, source: &DataSource) -> Vec<Shape> {
        self.render_path(projection, source)
    }
}

/// SVG path data (`M x,y L x,y ...`) through the given pixel coordinates.
pub(crate) fn path_data(points: impl IntoIterator<Item = (f64, f64)>) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.2},{:.2}", cmd, x, y);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::data::{DataPoint, DataSeries};
    use crate::plotting::graph::LabeledGraph;
    use crate::plotting::style::Color;

    fn sample() -> DataSource {
        DataSource::from(vec![
            DataPoint::xy(20.0, 70.0),
            DataPoint::xy(60.0, 30.0),
            DataPoint::xy(30.0, 80.0),
        ])
    }

    fn path_of(shape: &Shape) -> &str {
        match shape {
            Shape::Path { d, .. } => d,
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn test_path_data() {
        assert_eq!(path_data([(0.0, 1.0), (2.5, 3.0)]), "M0.00,1.00L2.50,3.00");
        assert_eq!(path_data(Vec::<(f64, f64)>::new()), "");
    }

    #[test]
    fn test_one_path_per_series_with_series_color() {
        let graph = LabeledGraph::new();
        let source = DataSource::new(vec![
            DataSeries::new(vec![DataPoint::xy(0.0, 0.0), DataPoint::xy(1.0, 1.0)]).color("#00ff00"),
            DataSeries::new(vec![DataPoint::xy(0.5, 0.5)]),
            DataSeries::new(vec![]),
        ]);
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        let shapes = LinePlot::new().render_path(&projection, &source);

        assert_eq!(shapes.len(), 2);
        match &shapes[0] {
            Shape::Path { style, .. } => {
                assert_eq!(style.color, Color::Rgb(0, 255, 0));
                assert_eq!(style.width, 2.0);
            }
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_orders_vertices_without_touching_source() {
        let graph = LabeledGraph::new();
        let source = sample();
        let before = source.clone();
        let projection = graph.projection(Some(&source), 600.0, 400.0);

        let unsorted = LinePlot::new().render_path(&projection, &source);
        let sorted = LinePlot::new().sort(true).render_path(&projection, &source);
        assert_eq!(source, before);

        let px = |x: f64, y: f64| projection.project(&DataPoint::xy(x, y)).unwrap();
        let expected_unsorted = path_data([px(20.0, 70.0), px(60.0, 30.0), px(30.0, 80.0)]);
        let expected_sorted = path_data([px(20.0, 70.0), px(30.0, 80.0), px(60.0, 30.0)]);
        assert_eq!(path_of(&unsorted[0]), expected_unsorted);
        assert_eq!(path_of(&sorted[0]), expected_sorted);
    }

    #[test]
    fn test_sort_is_stable_for_equal_x() {
        let graph = LabeledGraph::new();
        let source = DataSource::from(vec![
            DataPoint::xy(2.0, 1.0),
            DataPoint::xy(1.0, 5.0),
            DataPoint::xy(1.0, 3.0),
        ]);
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        let sorted = LinePlot::new().sort(true).render_path(&projection, &source);

        let px = |x: f64, y: f64| projection.project(&DataPoint::xy(x, y)).unwrap();
        let expected = path_data([px(1.0, 5.0), px(1.0, 3.0), px(2.0, 1.0)]);
        assert_eq!(path_of(&sorted[0]), expected);
    }
}
