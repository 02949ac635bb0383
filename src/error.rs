//! Error types for Hacker Stories
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoriesError
pub type Result<T> = std::result::Result<T, StoriesError>;

/// Unified error type for Hacker Stories operations
#[derive(Debug, Error)]
pub enum StoriesError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode story list: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Reducer Errors
    // -------------------------------------------------------------------------
    #[error("Unrecognized action: {0}")]
    UnrecognizedAction(String),

    #[error("Invalid payload for {action}: {reason}")]
    InvalidPayload { action: String, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
