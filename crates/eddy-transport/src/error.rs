//! Error types for eddy-transport

use thiserror::Error;

/// Transport error type
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Transport is not reachable
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Configured base URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;
