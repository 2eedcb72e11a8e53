//! AddressBook: the keyed collection of contact records.

use super::record::Record;
use crate::error::StorageResult;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// Default width of the upcoming-birthday window, in days after the
/// reference date.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// On-disk shape of an address book.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    #[serde(default)]
    records: Vec<Record>,
}

/// Records keyed by contact name.
///
/// Iteration is in ascending name order, so listings and birthday queries
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredBook", from = "StoredBook")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any existing record with the same name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "Storing record");
        self.records.insert(key, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`.
    ///
    /// `None` means there was no such contact; callers decide how to report it.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        debug!(name, found = removed.is_some(), "Deleting record");
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, Record> {
        self.records.values()
    }

    /// Names whose next birthday falls within a week of `reference`.
    ///
    /// See [`AddressBook::upcoming_birthdays_within`].
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays_within(reference, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Names whose next birthday falls in `[reference, reference + days]`.
    ///
    /// Each birthday is projected onto the reference year and rolled to the
    /// following year if it has already passed. The window is in plain
    /// calendar days with no weekend adjustment.
    pub fn upcoming_birthdays_within(&self, reference: NaiveDate, days: u32) -> Vec<String> {
        let Some(window_end) = reference.checked_add_days(Days::new(u64::from(days))) else {
            return Vec::new();
        };

        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|b| b.next_anniversary(reference))
                    .is_some_and(|next| next <= window_end)
            })
            .map(|record| record.name().as_str().to_string())
            .collect()
    }

    /// Serialize the whole book as JSON bytes.
    pub fn to_bytes(&self) -> StorageResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Rebuild a book from bytes produced by [`AddressBook::to_bytes`].
    ///
    /// Every name, phone, and birthday is re-validated.
    pub fn from_bytes(bytes: &[u8]) -> StorageResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<StoredBook> for AddressBook {
    fn from(stored: StoredBook) -> Self {
        let mut book = AddressBook::new();
        for record in stored.records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for StoredBook {
    fn from(book: AddressBook) -> Self {
        StoredBook {
            records: book.records.into_values().collect(),
        }
    }
}
