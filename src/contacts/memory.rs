//! In-memory contact store.

use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::contacts::model::{Contact, ContactId, NewContact};
use crate::contacts::repository::ContactRepository;
use crate::observability::metrics;

/// A thread-safe, non-persistent contact repository.
///
/// Cloning shares the underlying collection.
#[derive(Clone, Debug)]
pub struct InMemoryContactRepository {
    contacts: Arc<DashMap<ContactId, Contact>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryContactRepository {
    /// Create an empty repository. The first contact added gets id 1.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn get_all(&self) -> Vec<Contact> {
        let mut all: Vec<Contact> = self.contacts.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|c| c.id);
        all
    }

    fn get(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(&id).map(|r| r.value().clone())
    }

    fn add(&self, contact: NewContact) -> Option<Contact> {
        let id = match self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
        {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!("Contact id space exhausted");
                return None;
            }
        };
        let stored = contact.with_id(id);
        self.contacts.insert(id, stored.clone());

        tracing::debug!(id, "Contact added");
        metrics::record_store_size(self.contacts.len());
        Some(stored)
    }

    fn update(&self, contact: Contact) -> Option<Contact> {
        let mut existing = self.contacts.get_mut(&contact.id)?;
        existing.name = contact.name;
        existing.email = contact.email;

        tracing::debug!(id = contact.id, "Contact updated");
        Some(existing.value().clone())
    }

    fn delete(&self, id: ContactId) -> bool {
        let removed = self.contacts.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "Contact deleted");
            metrics::record_store_size(self.contacts.len());
        }
        removed
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
