//! Store error types
//!
//! Defines all errors that can occur in the persistence layer.

use thiserror::Error;

use crate::store::types::ValidationError;

/// Errors that can occur in the shortcut store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed (data directory creation, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Write rejected because the shortcut id is already taken
    #[error("Shortcut id already exists: {0}")]
    DuplicateId(String),

    /// Write rejected by pre-write validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateId("calculator".to_string());
        assert_eq!(err.to_string(), "Shortcut id already exists: calculator");

        let err = StoreError::Validation(ValidationError::EmptyField("name"));
        assert_eq!(
            err.to_string(),
            "Validation error: required field 'name' is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
