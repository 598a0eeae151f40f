//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::FieldError;
use crate::models::ContactInput;
use thiserror::Error;

/// Errors raised by a contact record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode documents
    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot serve requests right now
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The stored documents violate the expected shape
    #[error("Store data is corrupt: {0}")]
    Corrupt(String),
}

/// A rejected write: the field errors plus the input the user submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
    pub input: ContactInput,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Errors returned by contact service operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One or more field rules were violated; nothing was written
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    /// No contact with the requested id
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
