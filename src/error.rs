//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation errors live in [`crate::domain::errors`]; the types here cover the
//! store and command layers built on top of the validated values.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book or a contact.
#[derive(Error, Debug)]
pub enum BookError {
    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone entry matching the given number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while parsing or dispatching a command line.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The verb was recognized but the arguments do not fit
    #[error("Invalid command format. Usage: {0}")]
    Usage(&'static str),

    /// The verb itself is not recognized
    #[error("Invalid command: {0}")]
    Unknown(String),

    /// An address book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}
