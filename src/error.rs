//! Error types for the labdash front end
//!
//! All errors are typed - no .unwrap() or .expect() in production code.

use labdash_core::{ConfigError, DashError};
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Core(#[from] DashError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
