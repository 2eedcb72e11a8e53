//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers, and birthdays. Each
//! value object validates at construction, so a malformed value can never be
//! stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
