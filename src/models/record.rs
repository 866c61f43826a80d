//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone, PhoneInput, ValidationError};
use crate::error::{BookResult, NotFoundError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a required name and an ordered list of phone numbers.
///
/// The name is fixed at construction. Phones keep the order they were added
/// in, duplicates included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create an empty record for the given name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone number.
    ///
    /// Accepts a raw string or a `Phone`. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: impl PhoneInput) -> Result<(), ValidationError> {
        let phone = phone.into_phone()?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    ///
    /// A malformed query never matches; it is not an error.
    pub fn find_phone(&self, phone: impl AsRef<str>) -> Option<&Phone> {
        let phone = phone.as_ref();
        self.phones.iter().find(|p| *p == phone)
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: impl AsRef<str>) -> BookResult<Phone> {
        let phone = phone.as_ref();
        let index = self.position_of(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// The new value is validated before the old one is looked up, so a
    /// malformed replacement is reported even when `old_phone` is absent.
    /// The phone list is unchanged on any error.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed `new_phone`, then
    /// `NotFoundError::Phone` if `old_phone` is not in the record.
    pub fn edit_phone(
        &mut self,
        old_phone: impl AsRef<str>,
        new_phone: impl PhoneInput,
    ) -> BookResult<()> {
        let new_phone = new_phone.into_phone()?;
        let old_phone = old_phone.as_ref();
        let index = self.position_of(old_phone)?;

        tracing::debug!(
            name = %self.name,
            old = %old_phone,
            new = %new_phone,
            "Editing phone"
        );
        self.phones[index] = new_phone;
        Ok(())
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| NotFoundError::Phone(phone.to_string()).into())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
