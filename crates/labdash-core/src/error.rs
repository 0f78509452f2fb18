//! Error types for labdash core
//!
//! Provides a unified error type for storage, source and config operations.
//! The selection core itself never surfaces these: it logs and falls back.

use thiserror::Error;

/// Result type for labdash core operations
pub type Result<T> = std::result::Result<T, DashError>;

/// Unified error type for labdash core
#[derive(Error, Debug)]
pub enum DashError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Session storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DashError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        DashError::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        DashError::NotFound(msg.into())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DashError {
    fn from(err: toml::de::Error) -> Self {
        DashError::Config(err.to_string())
    }
}
