//! Error types for the gesture drive library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark input did not match the 21-point hand schema
    #[error("Invalid landmark set: {0}")]
    InvalidLandmarkSet(String),

    /// Command transmission exceeded the per-send deadline
    #[error("Transport timeout after {timeout_ms} ms")]
    TransportTimeout { timeout_ms: u64 },

    /// Command transmission failed (refused connection, HTTP error status, ...)
    #[error("Transport error: {0}")]
    TransportFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
