// src/error.rs

//! Unified error handling for the cloud emoji SDK.

use std::fmt;

use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-supplied value failed a precondition before any I/O
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level request failure
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// The platform served its generic error page for this uid
    #[error("No such user: {0}")]
    UserNotFound(String),

    /// The user exists but has published no qualifying emoji article
    #[error("No emoji article found for uid {0}")]
    NoEmojiArticle(String),

    /// A response was received but did not match the expected shape
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AppError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a network error carrying the attempted URL.
    pub fn network(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a parsing error.
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(message.into())
    }
}
