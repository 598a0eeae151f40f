use crate::error::StoreResult;
use crate::models::{Contact, ContactInput};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over the contact document collection, enabling
/// different implementations (in-memory, document file, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts in store order.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn find(&self, id: &str) -> StoreResult<Option<Contact>>;

    /// Retrieve any contact registered with exactly this email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Contact>>;

    /// Insert a new contact; the store assigns its ID.
    async fn insert(&self, input: ContactInput) -> StoreResult<Contact>;

    /// Overwrite the fields of the contact at `id`.
    ///
    /// Returns `None` when no contact has that ID.
    async fn update(&self, id: &str, input: ContactInput) -> StoreResult<Option<Contact>>;

    /// Delete a contact. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Flush and release the store.
    async fn shutdown(&self) -> StoreResult<()> {
        Ok(())
    }
}
