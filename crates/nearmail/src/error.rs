//! Error types for signing operations.

use nearmail_core::CoreError;
use thiserror::Error;

/// Errors raised by a [`crate::MessageSigner`].
#[derive(Debug, Error)]
pub enum SignerError {
    /// Key material could not be loaded.
    #[error("key error: {0}")]
    Key(#[from] CoreError),

    /// The signing backend failed (hardware fault, remote KMS, ...).
    #[error("signing backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur while signing a message.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Precondition, encoding, or hashing failure before signing.
    #[error("payload error: {0}")]
    Core(#[from] CoreError),

    /// The signer failed; no signature was produced.
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),
}

impl WalletError {
    /// Whether the call was rejected on a caller precondition (e.g. nonce
    /// length) before anything was hashed or signed.
    pub fn is_precondition(&self) -> bool {
        matches!(self, WalletError::Core(e) if e.is_precondition())
    }
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
