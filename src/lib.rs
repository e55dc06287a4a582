//! Contact Book - validated contact records with a persistent, searchable book.
//!
//! This library is the core of a personal contact manager: field values are
//! validated the moment they enter the system, records aggregate them, and
//! the book keeps the collection in sync with a JSON file on disk after
//! every mutation. Presentation layers (CLI, TUI) sit on top of this crate.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record aggregating domain values
//! - **book**: the persistent, name-keyed record collection
//! - **error**: custom error types for precise error handling
//! - **config**: path and log-level resolution from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::ContactBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, LookupError, PersistenceError, RecordError};
pub use models::ContactRecord;
