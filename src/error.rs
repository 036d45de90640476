//! Custom error types for daka
//!
//! Only I/O at the edge of the tool can fail. Calendar and projection
//! arithmetic are total functions and never produce a `DakaError`.

use thiserror::Error;

/// The main error type for daka operations
#[derive(Error, Debug)]
pub enum DakaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The state file could not be written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input (rules, labels, dates)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DakaError {
    /// Check if this error means a mutation may not have been persisted
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DakaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DakaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daka operations
pub type DakaResult<T> = Result<T, DakaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DakaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_storage_is_persistence() {
        let err = DakaError::Storage("disk full".into());
        assert!(err.is_persistence());
        assert!(!DakaError::Io("x".into()).is_persistence());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let daka_err: DakaError = io_err.into();
        assert!(matches!(daka_err, DakaError::Io(_)));
    }
}
