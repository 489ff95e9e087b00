//! Error types for LibQuality.
//!
//! One error type covers the resolver, the storage backends and input
//! validation. The view never shows these to the user directly; it collapses
//! them into a [`SearchError`](crate::SearchError).

use std::fmt;
use thiserror::Error;

/// The unified error type for LibQuality operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The resolution service answered, but not with what we asked for.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Local key-value storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (bad API URL, etc).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// An unexpected answer from the resolution service.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, or a description of the bad payload.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the service reported the repository as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The storage area exists but cannot be read as a key-value map.
    #[error("corrupt storage area {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// A lock guarding in-memory state was poisoned.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
