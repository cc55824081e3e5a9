//! Margins reserved around the plot area for axes, titles and the legend.
//!
//! Each side is a [`MarginRule`]: a pure function of the container size kept
//! as data, so margins stay proportional when the container is resized.

/// Fraction of the height reserved at the top for a title.
pub const TITLE_FRACTION: f64 = 1.0 / 20.0;
/// Fraction of the height reserved at the bottom for the x axis.
pub const X_AXIS_FRACTION: f64 = 1.0 / 20.0;
/// Bottom fraction once an x-axis title is shown.
pub const X_AXIS_TITLE_FRACTION: f64 = 1.0 / 10.0;
/// Fraction of the width reserved at the left for the y axis.
pub const Y_AXIS_FRACTION: f64 = 1.0 / 10.0;
/// Left fraction once a y-axis title is shown.
pub const Y_AXIS_TITLE_FRACTION: f64 = 1.0 / 5.0;
/// Extra bottom fraction taken by the legend band.
pub const LEGEND_FRACTION: f64 = 1.0 / 10.0;

/// Size of one margin as a function of `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginRule {
    Zero,
    OfWidth(f64),
    OfHeight(f64),
}

impl MarginRule {
    pub fn eval(&self, width: f64, height: f64) -> f64 {
        let value = match self {
            MarginRule::Zero => 0.0,
            MarginRule::OfWidth(f) => width * f,
            MarginRule::OfHeight(f) => height * f,
        };
        value.max(0.0)
    }
}

/// Evaluated margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Margin rules for the four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub left: MarginRule,
    pub right: MarginRule,
    pub top: MarginRule,
    pub bottom: MarginRule,
}

impl Margin {
    /// Rules for a graph with the given optional decorations shown.
    ///
    /// Every decoration maps to a fixed rule, so applying the same state
    /// twice yields the same margin.
    pub fn for_decorations(title: bool, x_axis_title: bool, y_axis_title: bool, legend: bool) -> Self {
        let bottom = if x_axis_title {
            X_AXIS_TITLE_FRACTION
        } else {
            X_AXIS_FRACTION
        } + if legend { LEGEND_FRACTION } else { 0.0 };

        Margin {
            left: MarginRule::OfWidth(if y_axis_title {
                Y_AXIS_TITLE_FRACTION
            } else {
                Y_AXIS_FRACTION
            }),
            right: MarginRule::Zero,
            top: if title {
                MarginRule::OfHeight(TITLE_FRACTION)
            } else {
                MarginRule::Zero
            },
            bottom: MarginRule::OfHeight(bottom),
        }
    }

    pub fn eval(&self, width: f64, height: f64) -> Insets {
        Insets {
            left: self.left.eval(width, height),
            right: self.right.eval(width, height),
            top: self.top.eval(width, height),
            bottom: self.bottom.eval(width, height),
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::for_decorations(false, false, false, false)
    }
}
