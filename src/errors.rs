//! Centralized error handling.
//!
//! `AppError` is the failure type of every collaborator behind the
//! registration controller (encrypter, repository, email validator).
//! The controller never forwards these to the caller: they are logged
//! and flattened into an internal-server-error response.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Collaborator failures
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Process level
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON payload")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn encryption(msg: impl Into<String>) -> Self {
        AppError::Encryption(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
