use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactInput};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Contact repository held entirely in process memory.
///
/// Contacts are kept in insertion order, which is the order `list` returns.
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id.as_str() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.email == email).cloned())
    }

    async fn insert(&self, input: ContactInput) -> StoreResult<Contact> {
        let contact = Contact::from_input(ContactId::generate(), input);
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, input: ContactInput) -> StoreResult<Option<Contact>> {
        let mut contacts = self.contacts.write().await;
        match contacts.iter_mut().find(|c| c.id.as_str() == id) {
            Some(contact) => {
                contact.apply(input);
                Ok(Some(contact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id.as_str() != id);
        Ok(contacts.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> ContactInput {
        ContactInput::new(name, email, "08123456789")
    }

    #[test]
    fn test_insert_assigns_id_and_keeps_order() {
        tokio_test::block_on(async {
            let repo = InMemoryContactRepository::new();
            let a = repo.insert(input("Satria", "satria@example.com")).await.unwrap();
            let b = repo.insert(input("Rama", "rama@example.com")).await.unwrap();
            assert_ne!(a.id, b.id);

            let all = repo.list().await.unwrap();
            assert_eq!(all, vec![a, b]);
        });
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact() {
        let repo = InMemoryContactRepository::new();
        repo.insert(input("Satria", "satria@example.com")).await.unwrap();

        assert!(repo.find_by_email("satria@example.com").await.unwrap().is_some());
        assert!(repo.find_by_email("satria@example").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryContactRepository::new();
        let result = repo.update("nope", input("Aji", "aji@example.com")).await.unwrap();
        assert!(result.is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryContactRepository::new();
        let created = repo.insert(input("Satria", "satria@example.com")).await.unwrap();

        let updated = repo
            .update(created.id.as_str(), input("Aji", "aji@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Aji");
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryContactRepository::new();
        let created = repo.insert(input("Satria", "satria@example.com")).await.unwrap();

        assert!(repo.delete(created.id.as_str()).await.unwrap());
        assert!(!repo.delete(created.id.as_str()).await.unwrap());
    }
}
