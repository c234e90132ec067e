//! Error types for the posada library.
//!
//! This module provides the error hierarchy for all operations in the
//! posada library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a posada error.
///
/// # Examples
///
/// ```
/// use posada::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the posada library.
///
/// This enum encompasses all possible error conditions that can occur
/// while managing catalog entities, room inventory, and reservations.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },

    /// A status code stored in the database has no named variant.
    #[error("unknown {entity} status code {code}")]
    UnknownStatusCode {
        /// The entity kind carrying the code (e.g. "reservation").
        entity: &'static str,
        /// The unrecognized integer code.
        code: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::Error;
    ///
    /// let err = Error::NotFound { resource: "experience 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "customer_email".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("customer_email"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "room type 42".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("room type 42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_data_directory_not_found_error() {
        let err = Error::DataDirectoryNotFound {
            path: PathBuf::from("/home/user/.posada"),
        };
        let display = format!("{err}");
        assert!(display.contains("data directory not found"));
        assert!(display.contains(".posada"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_unknown_status_code_error() {
        let err = Error::UnknownStatusCode {
            entity: "reservation",
            code: 9,
        };
        let display = format!("{err}");
        assert!(display.contains("reservation"));
        assert!(display.contains('9'));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NotFound {
                resource: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
