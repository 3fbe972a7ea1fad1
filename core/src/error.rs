//! Error types for Clientbook.

use crate::ClientId;
use thiserror::Error;

/// All errors surfaced by stores and exporters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Caller errors
    #[error("missing required field: {0}")]
    Validation(String),

    #[error("client not found: {0}")]
    NotFound(ClientId),

    // Backend errors
    #[error("storage error: {0}")]
    Storage(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl Error {
    /// Whether the error was caused by the caller rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
