//! Error types for the news-portal backend.

use thiserror::Error;

use crate::models::ValidationError;

/// Result type alias using the portal's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for portal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submission rejected with one or more field-level violations.
    /// Always carries the full set, never a partial one.
    #[error("Validation failed: {} violation(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Advisory lock could not be acquired (backing store unavailable).
    /// Distinct from a failure of the unit of work itself.
    #[error("Lock error: {0}")]
    Lock(String),

    /// A concurrent writer created a tag with the same name first.
    /// The suggestion lock is designed to prevent this; if it still
    /// occurs (external writer, lock bypass) it is surfaced, never
    /// swallowed.
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for conditions the caller can fix by changing the request.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The violation list carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&[ValidationError]> {
        match self {
            Error::Validation(errs) => Some(errs),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Internal(format!("serialization: {e}"))
    }
}
