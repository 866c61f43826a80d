//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Phone number must contain exactly 10 digits: {0}")]
    InvalidPhone(String),
}
