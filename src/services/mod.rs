//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! validation and the record store. They provide a clean boundary between
//! the HTTP handlers and the data access layer.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, Notice};

// Re-export common types used by services
pub use crate::models::{Contact, ContactInput, UpdateContactInput};
