//! In-memory contact store keyed by name.

use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The address book: a name-keyed collection of contacts.
///
/// Lookup is exact-match on the name used at insertion. The store also
/// tracks insertion order so the "list all" report walks contacts in the
/// order they were first added, which a plain `HashMap` would not give us.
///
/// Adding a second contact under an existing name replaces the stored
/// contact but keeps the original list position.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    entries: HashMap<String, Contact>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, keyed by its name.
    ///
    /// Overwrites any existing contact with the same name.
    pub fn add_record(&mut self, contact: Contact) {
        let name = contact.name().to_string();
        if self.entries.insert(name.clone(), contact).is_none() {
            self.order.push(name.clone());
        }
        debug!(contact = %name, total = self.entries.len(), "record stored");
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.entries.get(name)
    }

    /// Look up a contact by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.entries.get_mut(name)
    }

    /// Remove a contact by name, returning it if it was present.
    ///
    /// A no-op (returning `None`) when the name is unknown.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            self.order.retain(|n| n != name);
            debug!(contact = %name, "record removed");
        }
        removed
    }

    /// Iterate over contacts in insertion order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        // Every name in `order` has an entry; the two structures are only
        // ever mutated together.
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(name).unwrap()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));

        let found = book.find("Ann").unwrap();
        assert_eq!(found.name(), "Ann");
    }

    #[test]
    fn test_find_is_exact_match() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));

        assert!(book.find("ann").is_none());
        assert!(book.find("An").is_none());
    }

    #[test]
    fn test_remove_then_find_is_none() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));

        assert!(book.remove("Ann").is_some());
        assert!(book.find("Ann").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));

        assert!(book.remove("Bo").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_contacts_iterates_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(contact("Cy"));
        book.add_record(contact("Ann"));
        book.add_record(contact("Bo"));

        let names: Vec<&str> = book.contacts().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Cy", "Ann", "Bo"]);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        let mut first = contact("Ann");
        first.add_phone("0501234567").unwrap();
        book.add_record(first);

        // Same name, different data: the second insert wins.
        book.add_record(contact("Ann"));

        assert_eq!(book.len(), 1);
        assert!(book.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_overwrite_keeps_list_position() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));
        book.add_record(contact("Bo"));
        book.add_record(contact("Ann"));

        let names: Vec<&str> = book.contacts().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Ann", "Bo"]);
    }

    #[test]
    fn test_mutation_through_find_mut() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ann"));

        book.find_mut("Ann").unwrap().add_phone("0501234567").unwrap();
        assert_eq!(book.find("Ann").unwrap().phones().len(), 1);
    }
}
