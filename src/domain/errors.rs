//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the offending raw input so callers can echo it
/// back in a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace-only.
    InvalidName(String),

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as DD.MM.YYYY.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Name cannot be empty: {:?}", name),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {}", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date (expected DD.MM.YYYY): {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_input() {
        let err = ValidationError::InvalidPhone("12345".to_string());
        assert!(err.to_string().contains("12345"));

        let err = ValidationError::InvalidDate("32.01.2024".to_string());
        assert!(err.to_string().contains("32.01.2024"));
    }
}
