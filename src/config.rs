//! Chart configuration loaded from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::plotting::container::{Sizing, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::plotting::data::DataSource;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::scale::{is_valid_base, ScaleKind, DEFAULT_LOG_BASE};

/// Which plot a chart draws.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Scatter,
}

/// Host-facing chart properties. Every field is optional in the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub sizing: Sizing,
    pub x_field: String,
    pub y_field: String,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    /// Logarithm base for `log` scales
    pub base: f64,
    /// Line charts: connect points in ascending x order
    pub sort: bool,
    /// Scatter charts: marker radius in pixels
    pub point_radius: f64,
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            kind: ChartKind::Line,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            sizing: Sizing::Fixed,
            x_field: "x".to_string(),
            y_field: "y".to_string(),
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            base: DEFAULT_LOG_BASE,
            sort: false,
            point_radius: 3.5,
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            legend: false,
        }
    }
}

impl ChartConfig {
    /// Load and validate a chart configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ChartConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !(self.width > 0.0 && self.width.is_finite() && self.height > 0.0 && self.height.is_finite()) {
            return Err(PlotError::InvalidConfig(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.point_radius >= 0.0 && self.point_radius.is_finite()) {
            return Err(PlotError::InvalidConfig(format!(
                "point_radius must be non-negative, got {}",
                self.point_radius
            )));
        }
        if !is_valid_base(self.base) {
            return Err(PlotError::InvalidConfig(format!(
                "base must be positive and not 1, got {}",
                self.base
            )));
        }
        if self.x_field.is_empty() || self.y_field.is_empty() {
            return Err(PlotError::InvalidConfig("field names must not be empty".to_string()));
        }
        Ok(())
    }

    /// Reject a non-empty source in which no point carries both configured
    /// fields. Points missing either field are counted and reported once.
    pub fn check_data(&self, source: &DataSource) -> PlotResult<usize> {
        if source.is_empty() {
            return Ok(0);
        }
        let missing = source
            .points()
            .filter(|p| p.number(&self.x_field).is_none() || p.number(&self.y_field).is_none())
            .count();
        if missing < source.point_count() {
            if missing > 0 {
                warn!(
                    "{} of {} point(s) lack '{}' or '{}' and will be skipped",
                    missing,
                    source.point_count(),
                    self.x_field,
                    self.y_field
                );
            }
            Ok(missing)
        } else {
            Err(PlotError::InvalidData(format!(
                "no point has both '{}' and '{}' fields",
                self.x_field, self.y_field
            )))
        }
    }
}

/// Load a data source (a list of points or a list of series) from a JSON file.
pub fn load_data(path: impl AsRef<Path>) -> PlotResult<DataSource> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_temp(r#"{"kind": "scatter", "title": "Rainfall", "y_scale": "log"}"#);
        let config = ChartConfig::load(file.path()).unwrap();

        assert_eq!(config.kind, ChartKind::Scatter);
        assert_eq!(config.title.as_deref(), Some("Rainfall"));
        assert_eq!(config.y_scale, ScaleKind::Log);
        assert_eq!(config.width, 600.0);
        assert_eq!(config.point_radius, 3.5);
        assert_eq!(config.x_field, "x");
    }

    #[test]
    fn test_unknown_scale_kind_is_rejected() {
        let file = write_temp(r#"{"x_scale": "ordinal"}"#);
        assert!(matches!(ChartConfig::load(file.path()), Err(PlotError::Json(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let file = write_temp(r#"{"width": 0}"#);
        assert!(matches!(ChartConfig::load(file.path()), Err(PlotError::InvalidConfig(_))));

        let config = ChartConfig {
            base: 1.0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ChartConfig::load("/nonexistent/chart.json"),
            Err(PlotError::Io(_))
        ));
    }

    #[test]
    fn test_check_data_fields() {
        let config = ChartConfig::default();
        let ok: DataSource = serde_json::from_str(r#"[{"x": 1, "y": 2}]"#).unwrap();
        let bad: DataSource = serde_json::from_str(r#"[{"a": 1, "b": 2}]"#).unwrap();
        let partial: DataSource =
            serde_json::from_str(r#"[{"x": 1, "y": 2}, {"x": 3}, {"y": 4}]"#).unwrap();
        assert_eq!(config.check_data(&ok).unwrap(), 0);
        assert_eq!(config.check_data(&DataSource::default()).unwrap(), 0);
        assert_eq!(config.check_data(&partial).unwrap(), 2);
        assert!(matches!(config.check_data(&bad), Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_load_data_file() {
        let file = write_temp(r#"[{"label": "a", "points": [{"x": 1, "y": 2}, {"x": 2, "y": 3}]}]"#);
        let source = load_data(file.path()).unwrap();
        assert_eq!(source.series()[0].label, "a");
        assert_eq!(source.point_count(), 2);
    }
}
