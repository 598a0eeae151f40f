//! Domain value objects and types.
//!
//! Type-safe wrappers for contact IDs, email addresses, and mobile phone
//! numbers, plus the field-scoped errors produced by contact validation.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::{Field, FieldError, ValidationError};
pub use phone::PhoneNumber;
