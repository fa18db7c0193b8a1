//! Error types for Bookstock core operations.
//!
//! `InventoryError` is the internal taxonomy shared by validation and storage.
//! The inventory service never hands it to callers directly; it converts every
//! failure into an `ErrorReport` carrying a stable kind and a display message.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for storage and validation plumbing.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Result type returned by every inventory service operation.
pub type Outcome<T> = std::result::Result<T, ErrorReport>;

/// Core error type for inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A field failed validation before reaching storage
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Insert collided with an existing book id
    #[error("A book with ID {0} already exists")]
    DuplicateKey(i64),

    /// Operation referenced an id that is not stored
    #[error("No book exists with ID {0}")]
    NotFound(i64),

    /// Underlying persistence failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl InventoryError {
    /// Classify this error for callers that only need the category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateKey(_) => ErrorKind::DuplicateKey,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<rusqlite::Error> for InventoryError {
    fn from(err: rusqlite::Error) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

/// Stable error categories exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    DuplicateKey,
    NotFound,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::DuplicateKey => "duplicate_key",
            Self::NotFound => "not_found",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform failure report: a kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorReport {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl From<InventoryError> for ErrorReport {
    fn from(err: InventoryError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<ValidationError> for ErrorReport {
    fn from(err: ValidationError) -> Self {
        InventoryError::from(err).into()
    }
}
