//! Error types

use thiserror::Error;

/// Error type for transliteration operations
#[derive(Debug, Error)]
pub enum Error {
    /// Script tag outside the recognized set
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    /// Script definition or API configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for transliteration operations
pub type Result<T> = std::result::Result<T, Error>;
