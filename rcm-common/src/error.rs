//! Common error types for RCM

use thiserror::Error;

/// Common result type for RCM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across RCM processes
#[derive(Error, Debug)]
pub enum Error {
    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
