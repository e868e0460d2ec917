//! The address book store and the reports computed over it.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{upcoming_birthdays, BirthdayBucket};
