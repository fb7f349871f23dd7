//! Repository abstraction over the contact collection.

use crate::contacts::model::{Contact, ContactId, NewContact};

/// Sole owner and mutation gateway for contacts.
///
/// Operations never fail: a missing id is reported through the return value.
pub trait ContactRepository: Send + Sync {
    /// All stored contacts, ordered by id.
    fn get_all(&self) -> Vec<Contact>;

    /// The contact with the given id, if present.
    fn get(&self, id: ContactId) -> Option<Contact>;

    /// Store a new contact under a freshly assigned id.
    ///
    /// Returns `None` once every id has been handed out.
    fn add(&self, contact: NewContact) -> Option<Contact>;

    /// Overwrite name and email of the contact with `contact.id`.
    ///
    /// Returns the updated record, or `None` when no such contact exists.
    fn update(&self, contact: Contact) -> Option<Contact>;

    /// Remove the contact with the given id. Returns `false` if it was absent.
    fn delete(&self, id: ContactId) -> bool;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
