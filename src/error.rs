//! Unified error type for the todo gateway.
//!
//! Uses `thiserror` so errors chain cleanly from the HTTP transport and the
//! JSON boundary up to the tool surface.

use std::io;

use thiserror::Error;

/// Todo gateway error type
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O error (reading a response body, settings file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or unreadable startup configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Title was empty (or whitespace-only) after trimming
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The store matched no row for the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store rejected a write or returned an unexpected response
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP transport failure (connection, timeout, non-2xx status)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body did not match the expected row shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error (settings file)
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl From<ureq::Error> for TodoError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                TodoError::Http(format!("status {}: {}", code, body.trim()))
            }
            ureq::Error::Transport(t) => TodoError::Http(t.to_string()),
        }
    }
}
