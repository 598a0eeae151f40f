//! Data models for the contact book.
//!
//! The persisted contact document and the form payloads submitted by the
//! create, edit, and delete views.

pub mod contact;

pub use contact::{Contact, ContactInput, DeleteContactInput, UpdateContactInput};
