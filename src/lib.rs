//! Address Book - an in-memory contact directory.
//!
//! Stores contacts by name, each with a list of validated ten-digit phone
//! numbers, and supports adding, finding, editing, removing and deleting
//! entries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` capability
//! - **models**: The contact `Record` and the `AddressBook` that stores records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//! book.add_record(john);
//!
//! let john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Field, Name, Phone, PhoneInput, ValidationError};
pub use error::{BookError, BookResult, ConfigError, NotFoundError};
pub use models::{AddressBook, Record};
