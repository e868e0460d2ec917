//! Address Book - an interactive in-memory contact manager.
//!
//! Contacts carry a validated name, any number of validated 10-digit phone
//! numbers, and an optional `DD.MM.YYYY` birthday. The book answers exact
//! name lookups and an upcoming-birthdays report for the next week, with
//! weekend birthdays shifted to Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the Contact record built from validated fields
//! - **book**: the name-keyed store and the birthdays report
//! - **commands**: parsing and dispatch for the interactive loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{upcoming_birthdays, AddressBook, BirthdayBucket};
pub use commands::{execute, parse, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Contact;
