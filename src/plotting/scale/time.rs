//! Time scale: a linear scale over epoch milliseconds with calendar ticks.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use super::linear::LinearScale;
use super::{Domain, Range, Scale, MAX_TICKS};

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Spacing between consecutive time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    /// Fixed duration in milliseconds
    Millis(i64),
    /// Calendar months (12 = one year)
    Months(u32),
}

impl TimeStep {
    fn approx_millis(&self) -> f64 {
        match self {
            TimeStep::Millis(ms) => *ms as f64,
            TimeStep::Months(n) => *n as f64 * 30.44 * DAY as f64,
        }
    }

    fn label_format(&self) -> &'static str {
        match self {
            TimeStep::Millis(ms) if *ms < MINUTE => "%H:%M:%S",
            TimeStep::Millis(ms) if *ms < DAY => "%H:%M",
            TimeStep::Millis(_) => "%b %d",
            TimeStep::Months(n) if *n < 12 => "%B",
            TimeStep::Months(_) => "%Y",
        }
    }
}

const STEPS: &[TimeStep] = &[
    TimeStep::Millis(SECOND),
    TimeStep::Millis(5 * SECOND),
    TimeStep::Millis(15 * SECOND),
    TimeStep::Millis(30 * SECOND),
    TimeStep::Millis(MINUTE),
    TimeStep::Millis(5 * MINUTE),
    TimeStep::Millis(15 * MINUTE),
    TimeStep::Millis(30 * MINUTE),
    TimeStep::Millis(HOUR),
    TimeStep::Millis(3 * HOUR),
    TimeStep::Millis(6 * HOUR),
    TimeStep::Millis(12 * HOUR),
    TimeStep::Millis(DAY),
    TimeStep::Millis(2 * DAY),
    TimeStep::Millis(7 * DAY),
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Months(12),
];

/// Linear mapping of timestamps (epoch milliseconds) onto a pixel range.
#[derive(Debug, Clone)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain, range: Range) -> Self {
        TimeScale {
            inner: LinearScale::new(domain, range),
        }
    }

    /// Smallest step producing at most `count` ticks over the domain.
    pub fn step_for(&self, count: usize) -> TimeStep {
        let span = self.inner.domain().span();
        let count = count.max(1) as f64;
        if let Some(step) = STEPS.iter().find(|s| s.approx_millis() * count >= span) {
            return *step;
        }
        // Multi-year spans: whole years in 1/2/5 multiples
        let years = span / (TimeStep::Months(12).approx_millis() * count);
        let nice = [1u32, 2, 5, 10, 20, 50, 100, 200, 500, 1000]
            .into_iter()
            .find(|y| *y as f64 >= years)
            .unwrap_or(1000);
        TimeStep::Months(12 * nice)
    }

    fn to_datetime(ms: f64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(ms.round() as i64)
    }
}

impl Scale for TimeScale {
    fn map(&self, value: f64) -> f64 {
        self.inner.map(value)
    }

    fn domain(&self) -> Domain {
        self.inner.domain()
    }

    fn range(&self) -> Range {
        self.inner.range()
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let domain = self.inner.domain();
        if !domain.min.is_finite() || !domain.max.is_finite() {
            return Vec::new();
        }
        if domain.span() == 0.0 {
            return vec![domain.min];
        }

        match self.step_for(count) {
            TimeStep::Millis(step) => {
                let step = step as f64;
                let first = (domain.min / step).ceil() * step;
                (0..MAX_TICKS)
                    .map(|i| first + i as f64 * step)
                    .take_while(|tick| *tick <= domain.max)
                    .collect()
            }
            TimeStep::Months(step) => {
                let Some(start) = Self::to_datetime(domain.min) else {
                    return Vec::new();
                };
                let step = step as i32;
                // Month index counted from year 0, aligned to the step
                let mut index = start.year() * 12 + start.month0() as i32;
                index -= index.rem_euclid(step);

                let mut ticks = Vec::new();
                loop {
                    let (year, month0) = (index.div_euclid(12), index.rem_euclid(12));
                    let Some(t) = Utc
                        .with_ymd_and_hms(year, month0 as u32 + 1, 1, 0, 0, 0)
                        .single()
                    else {
                        break;
                    };
                    let ms = t.timestamp_millis() as f64;
                    if ms > domain.max {
                        break;
                    }
                    if ms >= domain.min {
                        ticks.push(ms);
                    }
                    index += step;
                }
                ticks
            }
        }
    }

    fn tick_label(&self, value: f64) -> String {
        let format = self.step_for(10).label_format();
        Self::to_datetime(value)
            .map(|d| d.format(format).to_string())
            .unwrap_or_default()
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(y: i32, m: u32, d: u32, h: u32) -> f64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().timestamp_millis() as f64
    }

    #[test]
    fn test_hourly_ticks_within_a_day() {
        let s = TimeScale::new(
            Domain::new(ms(2015, 3, 1, 0), ms(2015, 3, 1, 12)),
            (0.0, 600.0),
        );
        assert_eq!(s.step_for(10), TimeStep::Millis(3 * HOUR));
        let ticks = s.ticks(10);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], ms(2015, 3, 1, 0));
        assert_eq!(s.tick_label(ticks[1]), "03:00");
    }

    #[test]
    fn test_monthly_ticks_land_on_first_of_month() {
        let s = TimeScale::new(
            Domain::new(ms(2015, 1, 15, 0), ms(2015, 9, 15, 0)),
            (0.0, 600.0),
        );
        assert_eq!(s.step_for(10), TimeStep::Months(1));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first(), Some(&ms(2015, 2, 1, 0)));
        assert_eq!(ticks.last(), Some(&ms(2015, 9, 1, 0)));
        assert_eq!(s.tick_label(ticks[0]), "February");
    }

    #[test]
    fn test_multi_year_ticks() {
        let s = TimeScale::new(
            Domain::new(ms(1990, 1, 1, 0), ms(2020, 1, 1, 0)),
            (0.0, 600.0),
        );
        let ticks = s.ticks(10);
        assert!(ticks.len() >= 2 && ticks.len() <= 11);
        assert_eq!(s.tick_label(ticks[0]), "1990");
    }

    #[test]
    fn test_maps_like_linear() {
        let s = TimeScale::new(Domain::new(ms(2015, 1, 1, 0), ms(2015, 1, 2, 0)), (0.0, 240.0));
        assert!((s.map(ms(2015, 1, 1, 12)) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_steps_terminate_beyond_float_precision() {
        // one second is under half the float spacing at 1e19 ms
        let s = TimeScale::new(Domain::new(1e19, 1e19 + 8192.0), (0.0, 600.0));
        assert_eq!(s.step_for(10), TimeStep::Millis(SECOND));
        assert!(s.ticks(10).len() <= MAX_TICKS);
    }
}
