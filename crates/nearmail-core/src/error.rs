//! Error types for NEARMail Core.

use thiserror::Error;

/// Errors that can occur while building, encoding, or hashing a payload.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("invalid key material: {0}")]
    InvalidKey(String),
}

impl CoreError {
    /// Whether this error is a caller precondition violation (rejected
    /// before anything is encoded or hashed).
    pub fn is_precondition(&self) -> bool {
        matches!(self, CoreError::InvalidNonceLength { .. })
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
