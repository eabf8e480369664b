//! Error types for the Kinetic library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all carousel, store and planner operations.
#[derive(Error, Debug)]
pub enum KineticError {
    /// Storage backend read or write errors
    #[error("Storage error at path '{path}': {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Timestamp arithmetic errors
    #[error("Time error: {source}")]
    Time {
        #[from]
        source: jiff::Error,
    },
    /// Configuration errors, including components missing required elements
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with the offending path.
pub struct StorageErrorBuilder {
    path: PathBuf,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: std::io::Error) -> KineticError {
        KineticError::Storage {
            path: self.path,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KineticError {
        KineticError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KineticError {
    /// Creates a builder for storage errors.
    pub fn storage(path: impl Into<PathBuf>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(path)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        KineticError::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait mapping I/O results onto storage errors.
pub trait StorageResultExt<T> {
    /// Attach the path that was being accessed.
    fn storage_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, std::io::Error> {
    fn storage_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| KineticError::storage(path).with_source(e))
    }
}

/// Result type alias for Kinetic operations
pub type Result<T> = std::result::Result<T, KineticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = KineticError::invalid_input("confirmed").with_reason("deletion not confirmed");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'confirmed': deletion not confirmed"
        );
    }

    #[test]
    fn test_storage_context_keeps_path() {
        let io: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let err = io
            .storage_context(std::path::Path::new("/tmp/plans.json"))
            .unwrap_err();
        assert!(matches!(err, KineticError::Storage { ref path, .. } if path.ends_with("plans.json")));
        assert!(err.to_string().contains("disk full"));
    }
}
