//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// A required entity was missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No phone with this value exists in the record
    #[error("Phone number not found: {0}")]
    Phone(String),

    /// No record is stored under this name
    #[error("Record not found: {0}")]
    Record(String),
}

/// Errors returned by record and address book mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value failed its format invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The entity the operation requires does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl BookError {
    /// Whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error reports a malformed value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
