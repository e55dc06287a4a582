//! Configuration for applications embedding the contact book.
//!
//! The book itself always takes an explicit file path; this module is the
//! conventional place for a front end (CLI, TUI) to resolve that path and
//! its log level from the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default backing file, used when `CONTACT_BOOK_PATH` is unset.
const DEFAULT_BOOK_PATH: &str = "contacts.json";

/// Configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the book's backing file
    pub book_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: backing file path (default: `contacts.json`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if one exists, without failing when absent.
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            log_level,
        })
    }
}
