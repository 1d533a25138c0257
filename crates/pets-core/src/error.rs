//! Error types for the pets data layer.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all record access operations.
#[derive(Error, Debug)]
pub enum PetError {
    /// The identifier does not name the pet collection or a single pet
    #[error("Unrecognized identifier: {identifier}")]
    UnrecognizedIdentifier { identifier: String },
    /// The operation is not defined for this identifier shape
    #[error("{operation} is not supported for {identifier}")]
    UnsupportedOperation {
        operation: &'static str,
        identifier: String,
    },
    /// A field violates the pet record constraints
    #[error("Invalid value for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// The database file could not be opened or initialized
    #[error("Storage unavailable at '{}': {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// The stored schema is newer than this build understands
    #[error("Database schema version {found} is newer than supported version {supported}")]
    SchemaDowngrade { found: u32, supported: u32 },
    /// Statement-level database errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Runtime configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PetError {
        PetError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating field validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PetError {
        PetError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PetError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    pub(crate) fn unrecognized(identifier: impl Into<String>) -> Self {
        Self::UnrecognizedIdentifier {
            identifier: identifier.into(),
        }
    }

    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }

    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PetError::database(message).with_source(e))
    }
}

/// Result type alias for pet operations
pub type Result<T> = std::result::Result<T, PetError>;
