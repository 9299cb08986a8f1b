//! Error handling for the catalog seeder

use std::fmt;
use thiserror::Error;

/// Unified error type for the catalog seeder
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration errors that cannot be recovered by falling back to defaults
    #[error("Configuration error: {0}")]
    Config(String),

    /// A document store rejected a write
    #[error("Write to '{collection}' failed: {message}")]
    Write {
        /// Physical collection the write was aimed at
        collection: String,
        /// Store-provided reason
        message: String,
    },

    /// A document store rejected a read
    #[error("Store error: {0}")]
    Store(String),

    /// A built record broke one of its invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// A match points at a listing or requirement that was not seeded in this run
    #[error("Match '{match_id}' references missing {kind} '{target}'")]
    DanglingReference {
        match_id: String,
        kind: &'static str,
        target: String,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new write error for a collection
    pub fn write<C: fmt::Display, T: fmt::Display>(collection: C, msg: T) -> Self {
        Error::Write {
            collection: collection.to_string(),
            message: msg.to_string(),
        }
    }

    /// Create a new store error
    pub fn store<T: fmt::Display>(msg: T) -> Self {
        Error::Store(msg.to_string())
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Whether this error came from the store rejecting a write
    pub fn is_write(&self) -> bool {
        matches!(self, Error::Write { .. })
    }
}

/// Shorthand result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;
