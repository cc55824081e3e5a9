//! Chart components and the retained surface they draw on.
//!
//! A [`Chart`] composes a [`Container`], a [`LabeledGraph`] and a plot, and
//! re-renders through [`Surface::reconcile`] on every [`Change`].

pub mod backend;
pub mod chart;
pub mod container;
pub mod data;
pub mod element;
pub mod error;
pub mod graph;
pub mod margin;
pub mod plot;
pub mod scale;
pub mod style;
pub mod surface;

pub use chart::{Change, Chart, ChartPlot};
pub use container::{Container, Sizing};
pub use data::{DataPoint, DataSeries, DataSource, Value};
pub use element::Bounds;
pub use error::{PlotError, PlotResult};
pub use graph::{Axis, LabeledGraph, Projection};
pub use margin::{Insets, Margin, MarginRule};
pub use plot::{LinePlot, Plot, PlotState, ScatterPlot};
pub use scale::{Domain, LinearScale, LogScale, Scale, ScaleKind, TimeScale};
pub use style::{Color, FillStyle, LineStyle, TextAnchor, TextStyle};
pub use surface::{ElementKey, Patch, Shape, Surface};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ChartConfig, ChartKind};
    pub use crate::plotting::chart::{Change, Chart};
    pub use crate::plotting::data::{DataPoint, DataSeries, DataSource};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::graph::{Axis, LabeledGraph};
    pub use crate::plotting::plot::{LinePlot, PlotState, ScatterPlot};
    pub use crate::plotting::scale::{Scale, ScaleKind};
    pub use crate::plotting::style::Color;
}
