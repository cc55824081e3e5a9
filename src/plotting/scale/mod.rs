//! Axis scaling: mapping domain values onto pixel ranges.

mod linear;
mod log;
mod time;

pub use linear::LinearScale;
pub use log::{is_valid_base, LogScale, DEFAULT_BASE as DEFAULT_LOG_BASE};
pub use time::TimeScale;

use serde::{Deserialize, Serialize};

/// The `[min, max]` extent of one axis's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Domain { min, max }
    }

    /// Extent of the finite values, or `None` if there are none.
    pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Domain::new(v, v)),
                Some(d) => Some(Domain::new(d.min.min(v), d.max.max(v))),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Pixel interval a scale maps onto. `start` may exceed `end` (e.g. a y axis).
pub type Range = (f64, f64);

/// Which scale family an axis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Time,
    Log,
}

impl ScaleKind {
    /// Build a scale of this kind. `base` only applies to logarithmic scales.
    pub fn build(&self, domain: Domain, range: Range, base: f64) -> Box<dyn Scale> {
        match self {
            ScaleKind::Linear => Box::new(LinearScale::new(domain, range)),
            ScaleKind::Time => Box::new(TimeScale::new(domain, range)),
            ScaleKind::Log => Box::new(LogScale::new(domain, range, base)),
        }
    }
}

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Map a domain value to a pixel coordinate.
    fn map(&self, value: f64) -> f64;

    fn domain(&self) -> Domain;

    fn range(&self) -> Range;

    /// Generate tick values for this scale, aiming for roughly `count` ticks.
    fn ticks(&self, count: usize) -> Vec<f64>;

    /// Format a tick value as a label.
    fn tick_label(&self, value: f64) -> String {
        format_number(value)
    }

    /// Clone the scale into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Scale>;
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Interpolate `t` in `[0, 1]` over a range.
pub(crate) fn lerp(range: Range, t: f64) -> f64 {
    range.0 + t * (range.1 - range.0)
}

/// Auto-format a number based on its magnitude.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e6 || value.abs() < 0.01 {
        format!("{:.1e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Upper bound on the ticks any scale emits for one axis.
pub const MAX_TICKS: usize = 1000;

/// Generate nice tick positions for a given range.
///
/// Ranges too wide for a finite tick spacing yield just the two ends.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if !(max > min) {
        return if min.is_finite() { vec![min] } else { Vec::new() };
    }
    if num_ticks < 2 {
        return vec![min / 2.0 + max / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    if !(range.is_finite() && tick_spacing.is_finite() && tick_spacing > 0.0) {
        return if max.is_finite() { vec![min, max] } else { Vec::new() };
    }
    let nice_min = (min / tick_spacing).floor() * tick_spacing;
    let nice_max = (max / tick_spacing).ceil() * tick_spacing;

    let mut ticks = Vec::new();
    for i in 0..=MAX_TICKS {
        let tick = nice_min + i as f64 * tick_spacing;
        if !(tick <= nice_max + tick_spacing * 0.5) || ticks.len() == MAX_TICKS {
            break;
        }
        if tick >= min - tick_spacing * 0.001 && tick <= max + tick_spacing * 0.001 {
            // Snap float noise like 0.30000000000000004
            let snapped = (tick / tick_spacing).round() * tick_spacing;
            ticks.push(if snapped == 0.0 { 0.0 } else { snapped });
        }
    }

    ticks
}
