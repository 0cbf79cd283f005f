//! Error types for Newslens core functionality.

use thiserror::Error;

/// Main error type for Newslens.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Data parsing error.
    #[error("Data parsing error: {0}")]
    Parse(String),
    /// Request validation error.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Analysis engine error.
    #[error("Engine error: {0}")]
    Engine(String),
    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
    /// Custom error with message.
    #[error("{0}")]
    Custom(String),
}

/// Result type for Newslens operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create a custom error
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
