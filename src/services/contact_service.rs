//! Contact service layer.
//!
//! Validation and store orchestration for listing, viewing, creating,
//! updating, and deleting contacts.

use crate::error::{ContactError, ContactResult, ValidationFailure};
use crate::models::{Contact, ContactInput, UpdateContactInput};
use crate::repositories::ContactRepository;
use crate::validation::validate_contact;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// One-shot notification shown after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => "Data contact successfully added",
            Self::Updated => "Data contact successfully updated",
            Self::Deleted => "Data contact successfully deleted",
        }
    }
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts in store order.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// A single contact, or `ContactError::NotFound`.
    async fn get_contact(&self, id: &str) -> ContactResult<Contact>;

    /// Validate and insert a new contact.
    async fn create_contact(&self, input: ContactInput) -> ContactResult<Contact>;

    /// Validate and overwrite the fields of an existing contact.
    ///
    /// The uniqueness check exempts `input.old_email`, the address the
    /// caller's form was loaded with.
    async fn update_contact(&self, input: UpdateContactInput) -> ContactResult<Contact>;

    /// Delete a contact. Deleting a missing ID succeeds without effect.
    async fn delete_contact(&self, id: &str) -> ContactResult<()>;
}

/// Default implementation of ContactService.
///
/// Uniqueness is checked and then written in two separate store calls with
/// no lock between them; concurrent writers with the same email can both
/// pass the check.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service over the given store.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    async fn validate(
        &self,
        input: &ContactInput,
        existing_email: Option<&str>,
    ) -> ContactResult<()> {
        let errors = validate_contact(self.repository.as_ref(), input, existing_email)
            .await
            .map_err(log_store_error)?;

        if errors.is_empty() {
            return Ok(());
        }

        warn!("Rejected contact input with {} field error(s)", errors.len());
        Err(ContactError::Validation(ValidationFailure {
            errors,
            input: input.clone(),
        }))
    }
}

fn log_store_error(e: crate::error::StoreError) -> ContactError {
    error!("Contact store failure: {}", e);
    ContactError::Store(e)
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        let contacts = self.repository.list().await.map_err(log_store_error)?;
        debug!("Listed {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn get_contact(&self, id: &str) -> ContactResult<Contact> {
        self.repository
            .find(id)
            .await
            .map_err(log_store_error)?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }

    async fn create_contact(&self, input: ContactInput) -> ContactResult<Contact> {
        self.validate(&input, None).await?;

        let contact = self.repository.insert(input).await.map_err(log_store_error)?;
        info!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn update_contact(&self, input: UpdateContactInput) -> ContactResult<Contact> {
        let fields = input.fields();
        self.validate(&fields, Some(input.old_email.as_str())).await?;

        let contact = self
            .repository
            .update(&input.id, fields)
            .await
            .map_err(log_store_error)?
            .ok_or_else(|| ContactError::NotFound(input.id.clone()))?;
        info!("Updated contact {}", contact.id);
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> ContactResult<()> {
        let removed = self.repository.delete(id).await.map_err(log_store_error)?;
        if removed {
            info!("Deleted contact {}", id);
        } else {
            debug!("Delete of missing contact {} ignored", id);
        }
        Ok(())
    }
}
