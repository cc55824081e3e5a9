//! Chart: a container, a labeled graph and one plot bound to a data source.
//!
//! All state changes arrive as [`Change`] values through [`Chart::apply`].
//! Each change updates the owning component and then re-renders the whole
//! chart; reconciliation keeps the resulting surface edits minimal.

use std::path::Path;

use log::{debug, warn};

use crate::config::{ChartConfig, ChartKind};
use crate::plotting::container::Container;
use crate::plotting::data::DataSource;
use crate::plotting::error::PlotResult;
use crate::plotting::graph::{LabeledGraph, Projection};
use crate::plotting::plot::{LinePlot, Plot, PlotState, ScatterPlot};
use crate::plotting::scale::{is_valid_base, ScaleKind};
use crate::plotting::surface::{Patch, Surface};

/// The plot a chart draws.
#[derive(Debug, Clone)]
pub enum ChartPlot {
    Line(LinePlot),
    Scatter(ScatterPlot),
}

impl ChartPlot {
    fn as_plot(&self) -> &dyn Plot {
        match self {
            ChartPlot::Line(p) => p,
            ChartPlot::Scatter(p) => p,
        }
    }
}

/// A host-facing property change.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Rebind the data; `None` and an empty source both clear the plot
    DataSource(Option<DataSource>),
    /// Explicit container size, applied immediately
    Size { width: f64, height: f64 },
    /// Host element resized; applied on the next layout pass
    HostResize { width: f64, height: f64 },
    Title(Option<String>),
    XAxisTitle(Option<String>),
    YAxisTitle(Option<String>),
    Legend(bool),
    XScale(ScaleKind),
    YScale(ScaleKind),
    Base(f64),
    Fields { x: String, y: String },
    /// Line plots only
    Sort(bool),
    /// Scatter plots only
    PointRadius(f64),
}

impl Change {
    fn name(&self) -> &'static str {
        match self {
            Change::DataSource(_) => "data source",
            Change::Size { .. } => "size",
            Change::HostResize { .. } => "host resize",
            Change::Title(_) => "title",
            Change::XAxisTitle(_) => "x-axis title",
            Change::YAxisTitle(_) => "y-axis title",
            Change::Legend(_) => "legend",
            Change::XScale(_) => "x scale",
            Change::YScale(_) => "y scale",
            Change::Base(_) => "base",
            Change::Fields { .. } => "fields",
            Change::Sort(_) => "sort",
            Change::PointRadius(_) => "point radius",
        }
    }
}

/// A rendered chart owning its surface.
#[derive(Debug, Clone)]
pub struct Chart {
    container: Container,
    graph: LabeledGraph,
    plot: ChartPlot,
    source: Option<DataSource>,
    state: PlotState,
}

impl Chart {
    /// Build a chart from its parts and draw it once.
    pub fn new(container: Container, graph: LabeledGraph, plot: ChartPlot) -> Self {
        let mut chart = Chart {
            container,
            graph,
            plot,
            source: None,
            state: PlotState::NoData,
        };
        chart.render();
        chart
    }

    /// Line chart configured from `config`, ignoring its `kind`.
    pub fn line(config: &ChartConfig) -> Self {
        let plot = LinePlot::new().sort(config.sort);
        Self::new(container_for(config), graph_for(config), ChartPlot::Line(plot))
    }

    /// Scatter chart configured from `config`, ignoring its `kind`.
    pub fn scatter(config: &ChartConfig) -> Self {
        let plot = ScatterPlot::new().point_radius(config.point_radius);
        Self::new(container_for(config), graph_for(config), ChartPlot::Scatter(plot))
    }

    /// Chart of the kind named in `config`.
    pub fn from_config(config: &ChartConfig) -> Self {
        match config.kind {
            ChartKind::Line => Self::line(config),
            ChartKind::Scatter => Self::scatter(config),
        }
    }

    pub fn state(&self) -> PlotState {
        self.state
    }

    pub fn surface(&self) -> &Surface {
        self.container.surface()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    pub fn source(&self) -> Option<&DataSource> {
        self.source.as_ref()
    }

    /// Projection for the current data and size.
    pub fn projection(&self) -> Projection {
        self.graph.projection(
            self.source.as_ref(),
            self.container.width(),
            self.container.height(),
        )
    }

    /// Apply one change and return the surface edits it caused.
    pub fn apply(&mut self, change: Change) -> Patch {
        let name = change.name();
        let redraw = match change {
            Change::DataSource(source) => {
                self.source = source;
                true
            }
            Change::Size { width, height } => self.container.set_size(width, height),
            Change::HostResize { width, height } => {
                self.container.notify_resize(width, height);
                false
            }
            Change::Title(title) => {
                self.graph.set_title(title);
                true
            }
            Change::XAxisTitle(title) => {
                self.graph.set_x_axis_title(title);
                true
            }
            Change::YAxisTitle(title) => {
                self.graph.set_y_axis_title(title);
                true
            }
            Change::Legend(legend) => {
                self.graph.set_legend(legend);
                true
            }
            Change::XScale(kind) => {
                self.graph.x_scale = kind;
                true
            }
            Change::YScale(kind) => {
                self.graph.y_scale = kind;
                true
            }
            Change::Base(base) if is_valid_base(base) => {
                self.graph.base = base;
                true
            }
            Change::Base(base) => {
                warn!("ignoring log base {}; keeping {}", base, self.graph.base);
                false
            }
            Change::Fields { x, y } => {
                self.graph.x_field = x;
                self.graph.y_field = y;
                true
            }
            Change::Sort(sort) => match &mut self.plot {
                ChartPlot::Line(line) => {
                    line.sort = sort;
                    true
                }
                ChartPlot::Scatter(_) => false,
            },
            Change::PointRadius(radius) if !(radius >= 0.0 && radius.is_finite()) => {
                warn!("ignoring point radius {}", radius);
                false
            }
            Change::PointRadius(radius) => match &mut self.plot {
                ChartPlot::Scatter(scatter) => {
                    scatter.point_radius = radius;
                    true
                }
                ChartPlot::Line(_) => false,
            },
        };

        let patch = if redraw { self.render() } else { Patch::default() };
        debug!(
            "{} changed: +{} ~{} -{}",
            name,
            patch.created.len(),
            patch.updated.len(),
            patch.removed.len()
        );
        patch
    }

    /// Flush a pending host resize, re-rendering if the size changed.
    pub fn layout_pass(&mut self) -> Patch {
        if !self.container.layout_pass() {
            return Patch::default();
        }
        let patch = self.render();
        debug!(
            "layout pass at {}x{}: ~{}",
            self.container.width(),
            self.container.height(),
            patch.updated.len()
        );
        patch
    }

    fn render(&mut self) -> Patch {
        let width = self.container.width();
        let height = self.container.height();
        let source = self.source.as_ref();
        let projection = self.graph.projection(source, width, height);

        let surface = self.container.surface_mut();
        let mut patch = self.graph.render(surface, &projection, source, width, height);
        patch.merge(self.plot.as_plot().render(surface, &projection, source));

        let state = PlotState::of(source);
        if state != self.state {
            debug!("plot state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
        patch
    }

    /// The surface as an SVG document.
    pub fn render_svg(&self) -> String {
        self.container.render()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        self.container.save(path)
    }
}

fn container_for(config: &ChartConfig) -> Container {
    Container::new(config.width, config.height).sizing(config.sizing)
}

fn graph_for(config: &ChartConfig) -> LabeledGraph {
    let mut graph = LabeledGraph::new();
    graph.x_field = config.x_field.clone();
    graph.y_field = config.y_field.clone();
    graph.x_scale = config.x_scale;
    graph.y_scale = config.y_scale;
    graph.base = config.base;
    graph.set_title(config.title.clone());
    graph.set_x_axis_title(config.x_axis_title.clone());
    graph.set_y_axis_title(config.y_axis_title.clone());
    graph.set_legend(config.legend);
    graph
}
