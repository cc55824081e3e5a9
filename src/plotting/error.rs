//! Error types for chart rendering and configuration.

use std::fmt;
use std::io;

/// The main error type for chartkit operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file reading/writing)
    Io(io::Error),
    /// Malformed JSON in a configuration or data file
    Json(serde_json::Error),
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::Json(err) => write!(f, "JSON error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::Json(err)
    }
}

/// Result type alias for chartkit operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let err = PlotError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(err.source().is_some());

        let err = PlotError::InvalidConfig("width must be positive".into());
        assert_eq!(err.to_string(), "Invalid configuration: width must be positive");
        assert!(err.source().is_none());
    }
}
