//! Contact Book - a server-rendered contact management web application.
//!
//! Lists, creates, edits, deletes, and shows contact records (name, email,
//! phone), persisting them to a document store and reporting successful
//! writes through one-shot flash messages.
//!
//! # Architecture
//!
//! - **domain**: Value objects for IDs, emails, and mobile numbers, plus field errors
//! - **models**: The contact document and the form payloads
//! - **validation**: Field and uniqueness rules checked before every write
//! - **repositories**: Record store abstraction (in-memory and JSON document file)
//! - **services**: Contact operations orchestrating validation and the store
//! - **session**: Cookie-identified sessions holding flash messages
//! - **web**: Routes, handlers, method override, and HTML views
//! - **app**: Explicit construction, serving, and shutdown
//! - **config**: Configuration management from environment variables
//! - **error**: Error types for the store, service, and configuration

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;
pub mod validation;
pub mod web;

pub use app::Application;
pub use config::Config;
pub use error::{ConfigError, ContactError, StoreError, ValidationFailure};
pub use models::{Contact, ContactInput, DeleteContactInput, UpdateContactInput};
pub use services::{ContactService, ContactServiceImpl, Notice};
pub use session::{SessionId, SessionStore};
pub use web::{app as build_app, router, AppState};
