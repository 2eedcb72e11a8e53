//! Contact Book - a command-line address book for names, phone numbers, and
//! birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: `Record` and the `AddressBook` with its birthday query
//! - **commands**: Command parsing, handlers, and the interactive session
//! - **storage**: Persisting the address book between runs
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use storage::{AddressBookStore, JsonFileStore};
