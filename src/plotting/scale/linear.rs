//! Linear scale transformation.

use super::{lerp, nice_ticks, Domain, Range, Scale};

/// A linear mapping from a domain onto a pixel range.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: Domain,
    range: Range,
}

impl LinearScale {
    pub fn new(domain: Domain, range: Range) -> Self {
        LinearScale { domain, range }
    }

    /// Identity-like scale over `[0, 1]`, to be replaced once data arrives.
    pub fn auto() -> Self {
        LinearScale::new(Domain::new(0.0, 1.0), (0.0, 1.0))
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn map(&self, value: f64) -> f64 {
        let span = self.domain.span();
        // Collapsed domains pin every value to the start of the range
        if span == 0.0 {
            return self.range.0;
        }
        lerp(self.range, (value - self.domain.min) / span)
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn range(&self) -> Range {
        self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.min, self.domain.max, count)
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}
