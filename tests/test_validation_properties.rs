//! Property tests for the field validators.

use chrono::NaiveDate;
use contact_book::{Birthday, PhoneNumber, ValidationError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_ten_digit_string_is_a_phone(raw in "[0-9]{10}") {
        let phone = PhoneNumber::new(raw.clone()).unwrap();
        prop_assert_eq!(phone.as_str(), raw.as_str());
    }

    #[test]
    fn wrong_length_digit_strings_are_rejected(raw in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert_eq!(
            PhoneNumber::new(raw.clone()),
            Err(ValidationError::InvalidPhone(raw))
        );
    }

    #[test]
    fn strings_with_a_non_digit_are_rejected(
        prefix in "[0-9]{0,9}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,9}",
    ) {
        let raw = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(PhoneNumber::new(raw).is_err());
    }

    #[test]
    fn real_dates_round_trip_through_display(
        year in 1000i32..=9999,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        let raw = format!("{:02}.{:02}.{:04}", day, month, year);
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => {
                let birthday = Birthday::parse(&raw).unwrap();
                prop_assert_eq!(birthday.date(), date);
                prop_assert_eq!(birthday.to_string(), raw);
            }
            None => {
                prop_assert_eq!(
                    Birthday::parse(&raw),
                    Err(ValidationError::InvalidBirthday(raw.clone()))
                );
            }
        }
    }

    #[test]
    fn next_anniversary_is_within_a_year(
        birth in (1900i32..=2020, 1u32..=12, 1u32..=28),
        reference in (2000i32..=2100, 1u32..=12, 1u32..=28),
    ) {
        let birthday = Birthday::from_date(
            NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
        );
        let reference = NaiveDate::from_ymd_opt(reference.0, reference.1, reference.2).unwrap();

        let next = birthday.next_anniversary(reference).unwrap();
        prop_assert!(next >= reference);
        prop_assert!((next - reference).num_days() < 366);
    }
}
