//! Contact model representing one managed person.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is the contact's identity and is fixed at construction; phone
/// numbers and the birthday are added or edited afterward. Phone numbers
/// keep insertion order and duplicates are permitted.
///
/// Every field is a validated value object, so a `Contact` can never hold
/// a malformed name, phone, or date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Full name, the identity the address book keys on
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if one has been recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with a validated name, no phones, and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty after
    /// trimming whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the first phone number, if any.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// Get the birthday, if one has been recorded.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are not checked; the same number can appear more than once.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not exactly
    /// 10 digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone entry equal to `phone`.
    ///
    /// A no-op when nothing matches.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone entry equal to `old` with `new`.
    ///
    /// The replacement goes through full phone validation before anything
    /// is written, so the list is never left partially updated.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no entry equals `old` (checked
    /// before `new` is validated), or `ValidationError::InvalidPhone` if
    /// `new` is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Validate and set the birthday, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input is not a real
    /// calendar date in `DD.MM.YYYY` form.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }
}

// Display renders the card the way the `all` command prints it.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .as_ref()
            .map(|b| b.as_str())
            .unwrap_or("No birthday");
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
