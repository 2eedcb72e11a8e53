//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant is a malformed-input failure: the offending text is kept so
/// the caller can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits, got: {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY instead, got: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
