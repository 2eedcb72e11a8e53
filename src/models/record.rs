//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an optional birthday, and an ordered list of
/// phone numbers.
///
/// The name is fixed at creation. Phones keep insertion order and are not
/// deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    birthday: Option<Birthday>,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            birthday: None,
            phones: Vec::new(),
        }
    }

    /// Create an empty record, validating the name.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`.
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is validated before anything is touched, so an invalid
    /// replacement leaves the record unchanged. Otherwise every `old` is
    /// removed and `new` is appended.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        self.remove_phone(old);
        self.phones.push(replacement);
        Ok(())
    }

    /// Look up a phone by its exact value.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate and set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phones joined by `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "No birthday".to_string(),
        };
        write!(
            f,
            "Contact name: {}, contact birthday: {}, phones: {}",
            self.name,
            birthday,
            self.phones_display()
        )
    }
}
