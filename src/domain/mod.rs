//! Domain value objects and types.
//!
//! This module contains the validated field types a contact is made of.
//! Each value object checks its invariant at construction time so that an
//! invalid name or phone number can never be represented in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PhoneInput};
