//! Core error types for the spendtrack domain crate.
//!
//! This module defines store-agnostic error types. Adapter-specific failures
//! (network, permissions, missing documents) are converted to these types at
//! the store boundary.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the spendtrack core.
///
/// No variant here is fatal to the embedding process: store failures leave
/// derived views showing their last-known-good state, and validation errors
/// are surfaced back to the entry form.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for adapter operations.
///
/// Adapters convert their internal errors (network, permission, engine)
/// into this format, keeping the core independent of any store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested document was not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The identity behind the request is not allowed to touch the data.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A query could not be evaluated.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal/unexpected adapter error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and document coercion.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
