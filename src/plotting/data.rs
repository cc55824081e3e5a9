//! Data model: points, series and the data source a chart is bound to.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plotting::style::Color;

/// A single plotted value: a number or a UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Date(DateTime<Utc>),
}

impl Value {
    /// Numeric position of the value on an axis. Dates map to epoch milliseconds.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Date(d) => d.timestamp_millis() as f64,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

/// A record of named values. Which field feeds which axis is chosen by the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint {
    fields: IndexMap<String, Value>,
}

impl DataPoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point with the conventional `x` and `y` fields.
    pub fn xy(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        DataPoint::new().with("x", x).with("y", y)
    }

    /// Set a field, returning the point for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<Value> {
        self.fields.get(field).copied()
    }

    /// Numeric value of a field, if present.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).map(|v| v.as_f64())
    }
}

/// One named, colored sequence of data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: Color,
    #[serde(alias = "data")]
    pub points: Vec<DataPoint>,
}

impl DataSeries {
    /// Unlabeled black series.
    pub fn new(points: Vec<DataPoint>) -> Self {
        DataSeries {
            label: String::new(),
            color: Color::default(),
            points,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }
}

/// The data a chart is bound to: always a list of series.
///
/// A flat list of points is accepted on input and becomes one unlabeled series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataSource {
    series: Vec<DataSeries>,
}

impl DataSource {
    pub fn new(series: Vec<DataSeries>) -> Self {
        DataSource { series }
    }

    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    /// True when there is no point to draw in any series.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Iterate over every point of every series.
    pub fn points(&self) -> impl Iterator<Item = &DataPoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }
}

impl From<Vec<DataSeries>> for DataSource {
    fn from(series: Vec<DataSeries>) -> Self {
        DataSource::new(series)
    }
}

impl From<Vec<DataPoint>> for DataSource {
    fn from(points: Vec<DataPoint>) -> Self {
        if points.is_empty() {
            return DataSource::default();
        }
        DataSource::new(vec![DataSeries::new(points)])
    }
}

impl From<&[(f64, f64)]> for DataSource {
    fn from(pairs: &[(f64, f64)]) -> Self {
        pairs
            .iter()
            .map(|&(x, y)| DataPoint::xy(x, y))
            .collect::<Vec<_>>()
            .into()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Series(Vec<DataSeries>),
    Points(Vec<DataPoint>),
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSource::deserialize(deserializer)? {
            RawSource::Series(series) => DataSource::new(series),
            RawSource::Points(points) => DataSource::from(points),
        })
    }
}
