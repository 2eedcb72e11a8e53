//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default location of the persisted address book.
pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "address_book.json";

const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the address book is loaded from and saved to
    pub address_book_path: PathBuf,

    /// Width of the upcoming-birthday window in days (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Storage file (default: `address_book.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let address_book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            address_book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
