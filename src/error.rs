//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Field-level validation errors live in [`crate::domain::errors`];
//! the enums here cover record operations, persistence, and configuration.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when an operation names a target that does not exist.
///
/// Only `edit_phone` raises this: the caller explicitly named a phone it
/// expected to be present. Operations where absence is an expected outcome
/// (`find`, `find_phone`, `remove_phone`, `delete`) return `Option`/no-op
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No phone with the given value exists on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A named target was not found on the record
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors that can occur reading or writing the backing file.
///
/// A missing file on initial load is not an error (the book starts empty);
/// every other failure is fatal and propagated.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the book file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book file contents could not be parsed
    #[error("Corrupt book file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
