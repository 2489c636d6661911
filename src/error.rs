// src/error.rs

//! Unified error handling for the crawler.

use std::fmt;

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Every variant aborts the batch it occurs in; retry is the delivery
/// mechanism's responsibility.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed change-notification payload
    #[error("decode error: {0}")]
    Decode(String),

    /// HTTP retrieval failed
    #[error("fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Frontier store write failed
    #[error("write error for {url}: {message}")]
    Write { url: String, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a decode error.
    pub fn decode(message: impl fmt::Display) -> Self {
        Self::Decode(message.to_string())
    }

    /// Create a fetch error for the URL being retrieved.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a write error for the URL being inserted.
    pub fn write(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Write {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
