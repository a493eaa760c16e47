//! Error types for tiled CRS operations.

use thiserror::Error;

/// Result type alias using TcrsError.
pub type TcrsResult<T> = Result<T, TcrsError>;

/// Primary error type for tiled CRS operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TcrsError {
    // === Configuration Errors ===
    #[error("Definition for tiled CRS not found: {0}")]
    UnknownCrs(String),

    #[error("Unknown projection code: {0}")]
    UnknownProjection(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to load configuration: {0}")]
    Config(String),

    // === Query Errors ===
    #[error("Zoom level {zoom} outside valid range {min}..={max}")]
    ZoomOutOfRange { zoom: i64, min: i64, max: i64 },

    #[error("Invalid BBOX: {0}")]
    InvalidBbox(String),

    #[error("Coordinate transform failed: {0}")]
    Transform(String),
}

impl TcrsError {
    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a ZoomOutOfRange error.
    pub fn zoom_out_of_range(zoom: impl Into<i64>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self::ZoomOutOfRange {
            zoom: zoom.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// True for errors that are raised while a service is being set up and
    /// should be surfaced to the operator rather than to a client.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TcrsError::UnknownCrs(_)
                | TcrsError::UnknownProjection(_)
                | TcrsError::Configuration(_)
                | TcrsError::Config(_)
        )
    }

    /// Get the HTTP status code a request handler should answer with.
    pub fn http_status_code(&self) -> u16 {
        match self {
            TcrsError::ZoomOutOfRange { .. } | TcrsError::InvalidBbox(_) | TcrsError::Transform(_) => 400,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for TcrsError {
    fn from(err: std::io::Error) -> Self {
        TcrsError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(TcrsError::UnknownCrs("FOO".into()).is_configuration());
        assert!(TcrsError::configuration("bad zoom range").is_configuration());
        assert!(!TcrsError::zoom_out_of_range(-1, 0, 18).is_configuration());
        assert!(!TcrsError::Transform("inf".into()).is_configuration());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TcrsError::zoom_out_of_range(20, 0, 18).http_status_code(), 400);
        assert_eq!(TcrsError::InvalidBbox("1,2,3".into()).http_status_code(), 400);
        assert_eq!(TcrsError::Transform("inf".into()).http_status_code(), 400);
        assert_eq!(TcrsError::UnknownProjection("EPSG:1".into()).http_status_code(), 500);
    }

    #[test]
    fn test_range_message() {
        let err = TcrsError::zoom_out_of_range(-1, 0, 18);
        assert_eq!(err.to_string(), "Zoom level -1 outside valid range 0..=18");
    }
}
