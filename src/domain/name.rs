//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// A name is the identity key of a record in the book, so it is validated at
/// construction: non-empty and composed entirely of alphabetic characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or contains
    /// any non-alphabetic character (digits, spaces, punctuation).
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_alphabetic())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
