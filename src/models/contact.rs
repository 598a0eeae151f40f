//! Contact model and the form payloads that create, edit, and delete it.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A contact document as persisted by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier, immutable after creation
    #[serde(rename = "_id")]
    pub id: ContactId,

    pub name: String,

    pub email: String,

    pub phone: String,
}

impl Contact {
    /// Build a contact from an id and validated input fields.
    pub fn from_input(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }

    /// The editable fields of this contact.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, input: ContactInput) {
        self.name = input.name;
        self.email = input.email;
        self.phone = input.phone;
    }
}

/// Fields submitted by the create form.
///
/// Missing form fields deserialize as empty strings so they are reported by
/// validation instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Fields submitted by the edit form.
///
/// `old_email` is the email the form was loaded with; it exempts a contact
/// from colliding with its own address during the uniqueness check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UpdateContactInput {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "oldEmail")]
    pub old_email: String,

    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateContactInput {
    /// Prefill an edit form from a stored contact.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            old_email: contact.email.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }

    /// The editable fields carried by this form.
    pub fn fields(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Field submitted by the delete form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DeleteContactInput {
    pub id: String,
}
