//! The address book: records keyed by contact name.

use crate::error::{BookResult, NotFoundError};
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A collection of records keyed by the contact's name.
///
/// Iteration and rendering follow insertion order. Adding a record under a
/// name that already exists replaces the stored record in place.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// assert!(book.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        tracing::debug!(
            total = self.records.len(),
            replaced = replaced.is_some(),
            "Added record"
        );
        replaced
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let record = self.records.get(name);
        tracing::trace!(name = %name, found = record.is_some(), "Record lookup");
        record
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let record = self.records.get_mut(name);
        tracing::trace!(name = %name, found = record.is_some(), "Record lookup");
        record
    }

    /// Remove and return the record stored under `name`.
    ///
    /// Remaining records keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Record` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| NotFoundError::Record(name.to_string()))?;
        tracing::debug!(name = %name, total = self.records.len(), "Deleted record");
        Ok(record)
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as the ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - deserialize a list of records, keyed again by name
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("John", &["1234567890"])).is_none());

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert!(book.find("john").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        let replaced = book.add_record(record("John", &["5555555555"]));

        assert_eq!(replaced, Some(record("John", &["1234567890"])));
        assert_eq!(book.len(), 1);
        let found = book.find("John").unwrap();
        assert!(found.find_phone("1234567890").is_none());
        assert!(found.find_phone("5555555555").is_some());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        book.add_record(record("Jane", &[]));
        book.add_record(record("John", &["1234567890"]));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &["9876543210"]));
        let deleted = book.delete("Jane").unwrap();
        assert_eq!(deleted.name().as_str(), "Jane");
        assert!(book.find("Jane").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.delete("X"),
            Err(BookError::NotFound(NotFoundError::Record("X".to_string())))
        );
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book: AddressBook = ["A", "B", "C"]
            .iter()
            .map(|name| record(name, &[]))
            .collect();
        book.delete("A").unwrap();
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["B", "C"]);
    }

    #[test]
    fn test_display_in_insertion_order() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(record("John", &["1234567890", "5555555555"]));
        book.add_record(record("Jane", &["9876543210"]));
        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555\n\
             Contact name: Jane, phones: 9876543210"
        );
    }

    #[test]
    fn test_iteration() {
        let book: AddressBook = vec![record("John", &[]), record("Jane", &[])]
            .into_iter()
            .collect();
        let names: Vec<_> = (&book).into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert!(book.contains("Jane"));
        assert_eq!(book.records().count(), 2);
    }

    #[test]
    fn test_collect_repeated_name_last_write_wins() {
        let book: AddressBook = vec![
            record("John", &["1234567890"]),
            record("Jane", &["9876543210"]),
            record("John", &["5555555555"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(book.len(), 2);
        assert_eq!(book.find("John"), Some(&record("John", &["5555555555"])));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_extend_overwrites_existing() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.extend(vec![record("Jane", &[]), record("John", &["1112223333"])]);

        assert_eq!(book.len(), 2);
        let john = book.find("John").unwrap();
        assert!(john.find_phone("1234567890").is_none());
        assert!(john.find_phone("1112223333").is_some());
    }

    #[test]
    fn test_deserialization_repeated_name_last_write_wins() {
        let json = r#"[
            {"name":"John","phones":["1234567890"]},
            {"name":"Jane","phones":["9876543210"]},
            {"name":"John","phones":["5555555555"]}
        ]"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.find("John"), Some(&record("John", &["5555555555"])));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &[]));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"John","phones":["1234567890"]},{"name":"Jane","phones":[]}]"#
        );

        let restored: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
    }
}
