//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string is invalid.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => {
                write!(f, "Invalid name (letters only, non-empty): {}", name)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (must be exactly 10 digits): {}", phone)
            }
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid birthday (expected YYYY-MM-DD): {}", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
