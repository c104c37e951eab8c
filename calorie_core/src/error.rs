//! Error types for the calorie_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for calorie_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input rejected before reaching the ledger
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Backing store unavailable or a write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted value could not be parsed
    #[error("Corrupt value for key '{key}': {reason}")]
    CorruptValue { key: String, reason: String },
}

impl Error {
    /// True for failures that originate in the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Json(_) | Error::Storage(_) | Error::CorruptValue { .. }
        )
    }
}
