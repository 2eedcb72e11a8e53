//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can hand back to the REPL for rendering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number, birthday, or name failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// The named contact is not in the address book
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The command was given too few arguments
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::NotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = CommandError::from(ValidationError::InvalidPhone("12".to_string()));
        assert_eq!(err.to_string(), "Phone number must be 10 digits, got: 12");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_missing_arguments_display() {
        let err = CommandError::MissingArguments {
            command: "add",
            usage: "add <name> <phone>",
        };
        assert!(err.to_string().contains("add <name> <phone>"));
    }

    #[test]
    fn test_storage_error_wraps_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = StorageError::from(json_err);
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
