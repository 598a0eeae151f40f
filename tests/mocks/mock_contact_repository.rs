use async_trait::async_trait;
use contact_book::domain::ContactId;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::{Contact, ContactInput};
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data, tracks method calls for verification, and can be
/// switched into a failing mode to simulate an unreachable store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list")?;
        Ok(self.contacts())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| c.id.as_str() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_email")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| c.email == email).cloned())
    }

    async fn insert(&self, input: ContactInput) -> StoreResult<Contact> {
        self.track_call("insert")?;
        let contact = Contact::from_input(ContactId::generate(), input);
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, input: ContactInput) -> StoreResult<Option<Contact>> {
        self.track_call("update")?;
        let mut contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .iter_mut()
            .find(|c| c.id.as_str() == id)
            .map(|contact| {
                contact.apply(input);
                contact.clone()
            }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        self.track_call("delete")?;
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id.as_str() != id);
        Ok(contacts.len() != before)
    }
}
