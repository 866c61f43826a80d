//! The labeled value capability shared by contact fields.

use std::fmt::Display;

/// A validated, immutable scalar value carried by a contact record.
pub trait Field: Display {
    /// Short label for the field, e.g. `"name"`.
    fn label(&self) -> &'static str;

    /// The underlying string value.
    fn value(&self) -> &str;
}
