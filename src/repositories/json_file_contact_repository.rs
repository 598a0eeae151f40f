use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactInput};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Contact repository backed by a JSON document file.
///
/// The whole collection is kept in memory and the file is rewritten after
/// every mutation through a temp file and rename, so a crash leaves either
/// the old or the new collection on disk. The write lock is held until the
/// file is committed; if the write fails the in-memory change is rolled back.
pub struct JsonFileContactRepository {
    path: PathBuf,
    contacts: RwLock<Vec<Contact>>,
}

impl JsonFileContactRepository {
    /// Open the document file at `path`, creating an empty collection if it
    /// does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let load_path = path.clone();
        let contacts = tokio::task::spawn_blocking(move || load_documents(&load_path))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))??;

        info!(
            "Opened contact store at {} ({} contacts)",
            path.display(),
            contacts.len()
        );

        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }

    /// Path of the backing document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(&self, contacts: &[Contact]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(contacts)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))??;
        debug!("Wrote {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }
}

fn load_documents(path: &Path) -> StoreResult<Vec<Contact>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let bytes = std::fs::read(path)?;
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    let contacts: Vec<Contact> = serde_json::from_slice(&bytes)?;

    let mut seen = HashSet::new();
    for contact in &contacts {
        if !seen.insert(contact.id.as_str()) {
            return Err(StoreError::Corrupt(format!("duplicate _id {}", contact.id)));
        }
    }

    Ok(contacts)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl ContactRepository for JsonFileContactRepository {
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

        let mut contacts = self.contacts.write().await;
        contacts.push(contact.clone());
        if let Err(e) = self.commit(&contacts).await {
            contacts.pop();
            return Err(e);
        }

        Ok(contact)
    }

    async fn update(&self, id: &str, input: ContactInput) -> StoreResult<Option<Contact>> {
        let mut contacts = self.contacts.write().await;
        let index = match contacts.iter().position(|c| c.id.as_str() == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let previous = contacts[index].clone();
        contacts[index].apply(input);
        if let Err(e) = self.commit(&contacts).await {
            contacts[index] = previous;
            return Err(e);
        }

        Ok(Some(contacts[index].clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut contacts = self.contacts.write().await;
        let index = match contacts.iter().position(|c| c.id.as_str() == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        let removed = contacts.remove(index);
        if let Err(e) = self.commit(&contacts).await {
            contacts.insert(index, removed);
            return Err(e);
        }

        Ok(true)
    }

    async fn shutdown(&self) -> StoreResult<()> {
        let contacts = self.contacts.read().await;
        self.commit(&contacts).await?;
        info!("Contact store flushed to {}", self.path.display());
        Ok(())
    }
}
