//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$")
        .expect("Failed to compile birthday regex")
});

/// A validated calendar date of birth.
///
/// Parsed from `DD.MM.YYYY` and stored as a [`NaiveDate`] so it can take part
/// in date arithmetic. Dates that do not exist (`30.02.2024`, `29.02.2023`)
/// are rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("05.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// Single-digit day and month are accepted (`5.3.1990`); the year must
    /// be exactly four digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text does not
    /// match the pattern or names a date that does not exist.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        let caps = BIRTHDAY_REGEX.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's anniversary in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first anniversary on or after `reference`.
    pub fn next_anniversary(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(reference.year())?;
        if this_year < reference {
            self.anniversary_in(reference.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// Serde support - serialize in display format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("15.08.1992").unwrap();
        assert_eq!(birthday.date(), date(1992, 8, 15));
    }

    #[test]
    fn test_birthday_parse_single_digit_parts() {
        let birthday = Birthday::parse("5.3.1990").unwrap();
        assert_eq!(birthday.to_string(), "05.03.1990");
    }

    #[test]
    fn test_birthday_rejects_bad_shapes() {
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("1990-03-05").is_err());
        assert!(Birthday::parse("05/03/1990").is_err());
        assert!(Birthday::parse("05.03.90").is_err());
        assert!(Birthday::parse("05.03.19900").is_err());
        assert!(Birthday::parse(" 05.03.1990").is_err());
        assert!(Birthday::parse("32.01.2000").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("10.13.2000").is_err());
        assert!(Birthday::parse("10.00.2000").is_err());
    }

    #[test]
    fn test_birthday_rejects_nonexistent_dates() {
        assert!(Birthday::parse("30.02.2024").is_err());
        assert!(Birthday::parse("31.04.2024").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = Birthday::parse("30.02.2024").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("30.02.2024".to_string()));
    }

    #[test]
    fn test_next_anniversary_later_this_year() {
        let birthday = Birthday::parse("20.10.1990").unwrap();
        assert_eq!(
            birthday.next_anniversary(date(2026, 10, 16)),
            Some(date(2026, 10, 20))
        );
    }

    #[test]
    fn test_next_anniversary_today_is_not_rolled() {
        let birthday = Birthday::parse("16.10.1990").unwrap();
        assert_eq!(
            birthday.next_anniversary(date(2026, 10, 16)),
            Some(date(2026, 10, 16))
        );
    }

    #[test]
    fn test_next_anniversary_rolls_to_next_year() {
        let birthday = Birthday::parse("15.10.1990").unwrap();
        assert_eq!(
            birthday.next_anniversary(date(2026, 10, 16)),
            Some(date(2027, 10, 15))
        );
    }

    #[test]
    fn test_leap_day_falls_back_to_feb_28() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.anniversary_in(2027), Some(date(2027, 2, 28)));
        assert_eq!(birthday.anniversary_in(2028), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("01.12.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.12.1985\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.02.1985\"");
        assert!(result.is_err());
    }
}
