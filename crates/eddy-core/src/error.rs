//! Error types for eddy-core

use thiserror::Error;

/// Core error type
///
/// Only the host-facing surface fails. Transport failures inside executors
/// are turned into messages and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Runtime is closed")]
    Closed,

    #[error("Config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
