//! Shared error type across shutter crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ShutterError>;

/// Unified error type used by core, pipelines, and the server.
#[derive(Debug, Error)]
pub enum ShutterError {
    #[error("image not found at {0}")]
    ImageNotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("processing failed: {0}")]
    Processing(String),
    #[error("config: {0}")]
    Config(String),
}
