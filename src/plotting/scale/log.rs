//! Logarithmic scale transformation.

use super::{lerp, nice_ticks, Domain, Range, Scale, MAX_TICKS};

pub const DEFAULT_BASE: f64 = 10.0;

/// Whether `base` can serve as a logarithm base.
pub fn is_valid_base(base: f64) -> bool {
    base > 0.0 && base.is_finite() && base != 1.0
}

/// Maps `log_base(value)` linearly onto the range.
///
/// Domain values must be strictly positive; others map to non-finite pixels.
#[derive(Debug, Clone)]
pub struct LogScale {
    domain: Domain,
    range: Range,
    base: f64,
}

impl LogScale {
    pub fn new(domain: Domain, range: Range, base: f64) -> Self {
        let base = if is_valid_base(base) { base } else { DEFAULT_BASE };
        LogScale {
            domain,
            range,
            base,
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    fn log(&self, value: f64) -> f64 {
        value.ln() / self.base.ln()
    }

    /// `base^exponent` for an integral exponent.
    fn pow(&self, exponent: f64) -> f64 {
        if exponent.abs() <= i32::MAX as f64 {
            self.base.powi(exponent as i32)
        } else {
            self.base.powf(exponent)
        }
    }
}

impl Scale for LogScale {
    fn map(&self, value: f64) -> f64 {
        let lo = self.log(self.domain.min);
        let span = self.log(self.domain.max) - lo;
        if span == 0.0 {
            return self.range.0;
        }
        lerp(self.range, (self.log(value) - lo) / span)
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn range(&self) -> Range {
        self.range
    }

    /// Powers of the base inside the domain, falling back to linear ticks
    /// when the domain spans less than two of them. When there are more
    /// than `count` powers only every k-th exponent is kept.
    fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = (self.domain.min, self.domain.max);
        if !(min > 0.0) || !(max >= min) {
            return Vec::new();
        }

        let (a, b) = (self.log(min), self.log(max));
        let (first, last) = (a.min(b).floor(), a.max(b).ceil());
        if !(first.is_finite() && last.is_finite()) {
            return nice_ticks(min, max, count);
        }
        let stride = ((last - first + 1.0) / count.max(2) as f64).ceil().max(1.0);

        let tolerance = 1e-9 * max;
        let mut powers: Vec<f64> = (0..MAX_TICKS)
            .map(|i| first + i as f64 * stride)
            .take_while(|e| *e <= last)
            .map(|e| self.pow(e))
            .filter(|v| *v >= min - tolerance && *v <= max + tolerance)
            .collect();
        powers.sort_by(f64::total_cmp);

        if powers.len() >= 2 {
            powers
        } else {
            nice_ticks(min, max, count)
        }
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decades_are_evenly_spaced() {
        let s = LogScale::new(Domain::new(1.0, 1000.0), (0.0, 300.0), 10.0);
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert!((s.map(100.0) - 200.0).abs() < 1e-9);
        assert!((s.map(1000.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_two_ticks() {
        let s = LogScale::new(Domain::new(1.0, 16.0), (0.0, 100.0), 2.0);
        assert_eq!(s.ticks(10), vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_wide_domain_ticks_are_thinned() {
        let s = LogScale::new(Domain::new(1.0, 1e300), (0.0, 100.0), 10.0);
        let ticks = s.ticks(10);
        assert!(ticks.len() >= 2 && ticks.len() <= 11, "{:?}", ticks);
        assert_eq!(ticks[0], 1.0);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_base_near_one_ticks_are_bounded() {
        for base in [1.001, 1.0000001] {
            let s = LogScale::new(Domain::new(1.0, 1e300), (0.0, 100.0), base);
            let ticks = s.ticks(10);
            assert!(ticks.len() >= 2 && ticks.len() <= 11, "base {}: {} ticks", base, ticks.len());
            assert!(ticks.iter().all(|t| t.is_finite() && *t >= 1.0));
        }
    }

    #[test]
    fn test_base_below_one_ticks_ascend() {
        let s = LogScale::new(Domain::new(1.0, 16.0), (0.0, 100.0), 0.5);
        assert_eq!(s.ticks(10), vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_invalid_base_falls_back_to_ten() {
        assert_eq!(LogScale::new(Domain::new(1.0, 10.0), (0.0, 1.0), 1.0).base(), 10.0);
        assert_eq!(LogScale::new(Domain::new(1.0, 10.0), (0.0, 1.0), 0.0).base(), 10.0);
        assert_eq!(LogScale::new(Domain::new(1.0, 10.0), (0.0, 1.0), f64::INFINITY).base(), 10.0);
    }

    #[test]
    fn test_narrow_domain_uses_linear_ticks() {
        let s = LogScale::new(Domain::new(20.0, 60.0), (0.0, 100.0), 10.0);
        let ticks = s.ticks(5);
        assert!(ticks.len() >= 2);
        assert!(ticks.iter().all(|t| *t >= 20.0 && *t <= 60.0));
    }

    #[test]
    fn test_non_positive_values_are_not_finite() {
        let s = LogScale::new(Domain::new(1.0, 100.0), (0.0, 100.0), 10.0);
        assert!(!s.map(0.0).is_finite());
        assert!(s.map(-5.0).is_nan());
    }
}
