//! Plot types that draw a data source through a graph's scales.

mod line;
mod scatter;

pub use line::{LinePlot, LINE_CLASS};
pub use scatter::{ScatterPlot, POINT_CLASS};

use crate::plotting::data::DataSource;
use crate::plotting::graph::Projection;
use crate::plotting::surface::{Patch, Shape, Surface};

/// Whether a plot currently has anything to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotState {
    #[default]
    NoData,
    HasData,
}

impl PlotState {
    /// Absent and empty sources are both "no data".
    pub fn of(source: Option<&DataSource>) -> Self {
        match source {
            Some(s) if !s.is_empty() => PlotState::HasData,
            _ => PlotState::NoData,
        }
    }
}

/// Trait for plot types that can be rendered onto a surface.
pub trait Plot: std::fmt::Debug {
    /// Surface class of the elements this plot owns.
    fn class(&self) -> &'static str;

    /// Shapes for a non-empty source, in screen coordinates.
    fn shapes(&self, projection: &Projection, source: &DataSource) -> Vec<Shape>;

    /// Reconcile this plot's elements with the source: create, update in
    /// place, or remove everything when there is no data.
    fn render(
        &self,
        surface: &mut Surface,
        projection: &Projection,
        source: Option<&DataSource>,
    ) -> Patch {
        match source {
            Some(source) if PlotState::of(Some(source)) == PlotState::HasData => {
                surface.reconcile(self.class(), self.shapes(projection, source))
            }
            _ => surface.remove(self.class()),
        }
    }
}
