//! Axis-labeled graph: domains, scales, margins and the decorations drawn
//! around the plot area.

use log::debug;

use crate::plotting::data::{DataPoint, DataSource};
use crate::plotting::element::{AxisConfig, AxisPosition, Bounds, Legend, Text};
use crate::plotting::margin::{Insets, Margin, LEGEND_FRACTION, X_AXIS_FRACTION};
use crate::plotting::scale::{Domain, Range, Scale, ScaleKind, DEFAULT_LOG_BASE};
use crate::plotting::style::TextAnchor;
use crate::plotting::surface::{Patch, Shape, Surface};

pub const TITLE_CLASS: &str = "ev-title";
pub const X_AXIS_TITLE_CLASS: &str = "ev-axis-title ev-x-axis-title";
pub const Y_AXIS_TITLE_CLASS: &str = "ev-axis-title ev-y-axis-title";
pub const X_AXIS_CLASS: &str = "ev-axis ev-x-axis";
pub const Y_AXIS_CLASS: &str = "ev-axis ev-y-axis";
pub const LEGEND_CLASS: &str = "ev-legend-entry";

/// Gap between the top margin and the start of the plot area.
pub const PLOT_PADDING: f64 = 5.0;

/// One of the two graph axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Scales and origin needed to turn data points into screen coordinates.
#[derive(Debug, Clone)]
pub struct Projection {
    pub x: Box<dyn Scale>,
    pub y: Box<dyn Scale>,
    /// Top-left corner of the plot area
    pub origin: (f64, f64),
    x_field: String,
    y_field: String,
}

impl Projection {
    /// Value of the x field, if the point has one.
    pub fn x_value(&self, point: &DataPoint) -> Option<f64> {
        point.number(&self.x_field)
    }

    /// Screen position of a point, or `None` if it lacks either field.
    pub fn project(&self, point: &DataPoint) -> Option<(f64, f64)> {
        let x = point.number(&self.x_field)?;
        let y = point.number(&self.y_field)?;
        Some((self.origin.0 + self.x.map(x), self.origin.1 + self.y.map(y)))
    }
}

/// A graph with optional title, axis titles and legend.
///
/// Margins are derived from which decorations are shown, so toggling one on
/// and back off always restores the previous layout.
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    title: Option<String>,
    x_axis_title: Option<String>,
    y_axis_title: Option<String>,
    legend: bool,
    margin: Margin,
    /// Scale family for the x axis
    pub x_scale: ScaleKind,
    /// Scale family for the y axis
    pub y_scale: ScaleKind,
    /// Base for logarithmic scales
    pub base: f64,
    /// Point field read for the x axis
    pub x_field: String,
    /// Point field read for the y axis
    pub y_field: String,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    legend_style: Legend,
}

impl LabeledGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn x_axis_title(&self) -> Option<&str> {
        self.x_axis_title.as_deref()
    }

    pub fn y_axis_title(&self) -> Option<&str> {
        self.y_axis_title.as_deref()
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Set or clear the title. An empty string counts as cleared.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title.filter(|t| !t.is_empty());
        self.update_margin();
    }

    pub fn set_x_axis_title(&mut self, title: Option<String>) {
        self.x_axis_title = title.filter(|t| !t.is_empty());
        self.update_margin();
    }

    pub fn set_y_axis_title(&mut self, title: Option<String>) {
        self.y_axis_title = title.filter(|t| !t.is_empty());
        self.update_margin();
    }

    pub fn set_legend(&mut self, legend: bool) {
        self.legend = legend;
        self.update_margin();
    }

    fn update_margin(&mut self) {
        self.margin = Margin::for_decorations(
            self.title.is_some(),
            self.x_axis_title.is_some(),
            self.y_axis_title.is_some(),
            self.legend,
        );
    }

    fn field(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x_field,
            Axis::Y => &self.y_field,
        }
    }

    /// `[min, max]` of the axis field over every point of every series.
    ///
    /// Absent or empty sources, and sources where no point carries the
    /// field, give `[0, 0]`.
    pub fn domain(&self, axis: Axis, source: Option<&DataSource>) -> Domain {
        let field = self.field(axis);
        let mut missing = 0usize;
        let values = source.into_iter().flat_map(|s| s.points()).filter_map(|p| {
            let value = p.number(field);
            if value.is_none() {
                missing += 1;
            }
            value
        });
        let domain = Domain::extent(values).unwrap_or(Domain::new(0.0, 0.0));
        if missing > 0 {
            debug!("{} point(s) have no '{}' field; skipped", missing, field);
        }
        domain
    }

    /// Pixel range of an axis inside a `width` x `height` container.
    pub fn range(&self, axis: Axis, width: f64, height: f64) -> Range {
        let insets = self.insets(width, height);
        match axis {
            Axis::X => (0.0, width - insets.left - insets.right - PLOT_PADDING),
            Axis::Y => (height - insets.bottom - insets.top - PLOT_PADDING, 0.0),
        }
    }

    /// Scale for an axis, from its domain over `source` onto its range.
    pub fn scale(&self, axis: Axis, source: Option<&DataSource>, width: f64, height: f64) -> Box<dyn Scale> {
        let kind = match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        };
        kind.build(
            self.domain(axis, source),
            self.range(axis, width, height),
            self.base,
        )
    }

    pub fn insets(&self, width: f64, height: f64) -> Insets {
        self.margin.eval(width, height)
    }

    /// Top-left corner of the plot area; the y axis hangs from here.
    pub fn plot_origin(&self, width: f64, height: f64) -> (f64, f64) {
        let insets = self.insets(width, height);
        (insets.left, insets.top + PLOT_PADDING)
    }

    /// Everything a plot needs to place points for the current state.
    pub fn projection(&self, source: Option<&DataSource>, width: f64, height: f64) -> Projection {
        Projection {
            x: self.scale(Axis::X, source, width, height),
            y: self.scale(Axis::Y, source, width, height),
            origin: self.plot_origin(width, height),
            x_field: self.x_field.clone(),
            y_field: self.y_field.clone(),
        }
    }

    /// Band below the tick labels where legend entries are laid out.
    fn legend_band(&self, width: f64, height: f64) -> Bounds {
        let insets = self.insets(width, height);
        let top = height - insets.bottom + height * X_AXIS_FRACTION;
        Bounds::new(insets.left, width - insets.right, top, top + height * LEGEND_FRACTION)
    }

    /// Reconcile axes, titles and legend with the current state.
    pub fn render(
        &self,
        surface: &mut Surface,
        projection: &Projection,
        source: Option<&DataSource>,
        width: f64,
        height: f64,
    ) -> Patch {
        let insets = self.insets(width, height);
        let mut patch = Patch::default();

        patch.merge(surface.reconcile(
            X_AXIS_CLASS,
            vec![self.x_axis.render(&*projection.x, (insets.left, height - insets.bottom))],
        ));
        patch.merge(surface.reconcile(
            Y_AXIS_CLASS,
            vec![self.y_axis.render(&*projection.y, projection.origin)],
        ));

        let title = self.title.as_ref().map(|t| {
            Text::new(t.clone(), width / 2.0, insets.top / 2.0).anchor(TextAnchor::Middle)
        });
        patch.merge(reconcile_text(surface, TITLE_CLASS, title));

        let x_title = self.x_axis_title.as_ref().map(|t| {
            Text::new(t.clone(), (width - insets.left - insets.right) / 2.0, height)
        });
        patch.merge(reconcile_text(surface, X_AXIS_TITLE_CLASS, x_title));

        let y_title = self.y_axis_title.as_ref().map(|t| {
            Text::new(
                t.clone(),
                -(height - insets.top - insets.bottom) / 2.0,
                insets.left / 20.0,
            )
            .rotation(-90.0)
        });
        patch.merge(reconcile_text(surface, Y_AXIS_TITLE_CLASS, y_title));

        let entries = match source {
            Some(source) if self.legend && !source.is_empty() => self
                .legend_style
                .render(source.series(), &self.legend_band(width, height)),
            _ => Vec::new(),
        };
        patch.merge(surface.reconcile(LEGEND_CLASS, entries));

        patch
    }
}

fn reconcile_text(surface: &mut Surface, class: &str, text: Option<Text>) -> Patch {
    surface.reconcile(class, text.map(Shape::Text).into_iter().collect())
}

impl Default for LabeledGraph {
    fn default() -> Self {
        LabeledGraph {
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            legend: false,
            margin: Margin::default(),
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            base: DEFAULT_LOG_BASE,
            x_field: "x".to_string(),
            y_field: "y".to_string(),
            x_axis: AxisConfig::new(AxisPosition::Bottom),
            y_axis: AxisConfig::new(AxisPosition::Left),
            legend_style: Legend::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::data::DataSeries;

    fn sample() -> DataSource {
        DataSource::from(vec![
            DataPoint::xy(20.0, 70.0),
            DataPoint::xy(60.0, 30.0),
            DataPoint::xy(30.0, 80.0),
        ])
    }

    #[test]
    fn test_domain_spans_all_series() {
        let graph = LabeledGraph::new();
        let source = DataSource::new(vec![
            DataSeries::new(vec![DataPoint::xy(20.0, 70.0), DataPoint::xy(60.0, 30.0)]),
            DataSeries::new(vec![DataPoint::xy(-5.0, 90.0)]),
        ]);
        assert_eq!(graph.domain(Axis::X, Some(&source)), Domain::new(-5.0, 60.0));
        assert_eq!(graph.domain(Axis::Y, Some(&source)), Domain::new(30.0, 90.0));
    }

    #[test]
    fn test_domain_defaults_to_zero() {
        let graph = LabeledGraph::new();
        assert_eq!(graph.domain(Axis::X, None), Domain::new(0.0, 0.0));
        assert_eq!(
            graph.domain(Axis::Y, Some(&DataSource::default())),
            Domain::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_domain_uses_configured_field() {
        let mut graph = LabeledGraph::new();
        graph.x_field = "time".to_string();
        let source = DataSource::from(vec![
            DataPoint::new().with("time", 3.0).with("y", 1.0),
            DataPoint::new().with("time", 9.0).with("y", 2.0),
            DataPoint::xy(100.0, 3.0),
        ]);
        assert_eq!(graph.domain(Axis::X, Some(&source)), Domain::new(3.0, 9.0));
    }

    #[test]
    fn test_ranges_follow_margins() {
        let graph = LabeledGraph::new();
        // left 60, right 0, top 0, bottom 20
        assert_eq!(graph.range(Axis::X, 600.0, 400.0), (0.0, 535.0));
        assert_eq!(graph.range(Axis::Y, 600.0, 400.0), (375.0, 0.0));
        assert_eq!(graph.plot_origin(600.0, 400.0), (60.0, 5.0));
    }

    #[test]
    fn test_scale_is_monotonic_and_spans_range() {
        let graph = LabeledGraph::new();
        let source = sample();
        let x = graph.scale(Axis::X, Some(&source), 600.0, 400.0);
        let y = graph.scale(Axis::Y, Some(&source), 600.0, 400.0);

        assert!((x.map(20.0) - 0.0).abs() < 1e-9);
        assert!((x.map(60.0) - 535.0).abs() < 1e-9);
        assert!(x.map(30.0) < x.map(40.0));

        assert!((y.map(30.0) - 375.0).abs() < 1e-9);
        assert!((y.map(80.0) - 0.0).abs() < 1e-9);
        assert!(y.map(50.0) > y.map(60.0));
    }

    #[test]
    fn test_toggling_decorations_restores_margin() {
        let mut graph = LabeledGraph::new();
        let before = graph.insets(600.0, 400.0);

        graph.set_title(Some("Title".into()));
        graph.set_x_axis_title(Some("X".into()));
        graph.set_y_axis_title(Some("Y".into()));
        graph.set_legend(true);
        let shown = graph.insets(600.0, 400.0);
        assert_eq!(shown.top, 20.0);
        assert_eq!(shown.left, 120.0);
        assert!(shown.bottom > before.bottom);

        graph.set_title(None);
        graph.set_x_axis_title(Some(String::new()));
        graph.set_y_axis_title(None);
        graph.set_legend(false);
        assert_eq!(graph.insets(600.0, 400.0), before);
    }

    #[test]
    fn test_render_titles_create_update_remove() {
        let mut graph = LabeledGraph::new();
        let mut surface = Surface::new();
        let source = sample();

        graph.set_title(Some("Revenue".into()));
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);
        match surface.get(TITLE_CLASS, 0) {
            Some(Shape::Text(t)) => {
                assert_eq!(t.content, "Revenue");
                assert_eq!((t.x, t.y), (300.0, 10.0));
                assert_eq!(t.style.anchor, TextAnchor::Middle);
            }
            other => panic!("missing title: {:?}", other),
        }

        graph.set_title(Some("Costs".into()));
        let patch = graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);
        assert_eq!(patch.updated, vec![crate::plotting::surface::ElementKey::new(TITLE_CLASS, 0)]);

        graph.set_title(None);
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);
        assert_eq!(surface.count(TITLE_CLASS), 0);
    }

    #[test]
    fn test_axis_titles_placement() {
        let mut graph = LabeledGraph::new();
        let mut surface = Surface::new();
        graph.set_x_axis_title(Some("Time".into()));
        graph.set_y_axis_title(Some("Count".into()));
        let projection = graph.projection(None, 600.0, 400.0);
        graph.render(&mut surface, &projection, None, 600.0, 400.0);

        // left 120, right 0, top 0, bottom 40
        match surface.get(X_AXIS_TITLE_CLASS, 0) {
            Some(Shape::Text(t)) => assert_eq!((t.x, t.y), (240.0, 400.0)),
            other => panic!("missing x-axis title: {:?}", other),
        }
        match surface.get(Y_AXIS_TITLE_CLASS, 0) {
            Some(Shape::Text(t)) => {
                assert_eq!((t.x, t.y), (-180.0, 6.0));
                assert_eq!(t.style.rotation, -90.0);
            }
            other => panic!("missing y-axis title: {:?}", other),
        }
    }

    #[test]
    fn test_axes_translated_to_plot_edges() {
        let graph = LabeledGraph::new();
        let mut surface = Surface::new();
        let source = sample();
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);

        match surface.get(X_AXIS_CLASS, 0) {
            Some(Shape::Group { translate, .. }) => assert_eq!(*translate, (60.0, 380.0)),
            other => panic!("missing x axis: {:?}", other),
        }
        match surface.get(Y_AXIS_CLASS, 0) {
            Some(Shape::Group { translate, .. }) => assert_eq!(*translate, (60.0, 5.0)),
            other => panic!("missing y axis: {:?}", other),
        }
    }

    #[test]
    fn test_legend_entries_only_with_data() {
        let mut graph = LabeledGraph::new();
        let mut surface = Surface::new();
        graph.set_legend(true);

        let projection = graph.projection(None, 600.0, 400.0);
        graph.render(&mut surface, &projection, None, 600.0, 400.0);
        assert_eq!(surface.count(LEGEND_CLASS), 0);

        let source = DataSource::new(vec![
            DataSeries::new(vec![DataPoint::xy(1.0, 1.0)]).label("a"),
            DataSeries::new(vec![DataPoint::xy(2.0, 2.0)]).label("b"),
        ]);
        let projection = graph.projection(Some(&source), 600.0, 400.0);
        graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);
        assert_eq!(surface.count(LEGEND_CLASS), 2);

        graph.set_legend(false);
        graph.render(&mut surface, &projection, Some(&source), 600.0, 400.0);
        assert_eq!(surface.count(LEGEND_CLASS), 0);
    }
}
