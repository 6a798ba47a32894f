//! Signer abstraction: the key-signing collaborator.
//!
//! The wallet depends only on this trait. Implementations may hold a key in
//! memory, talk to a hardware device, or call a remote KMS.

use async_trait::async_trait;
use nearmail_core::Keypair;

use crate::error::SignerError;

/// Result type for signer operations.
pub type Result<T> = std::result::Result<T, SignerError>;

/// Raw output of a signing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOutput {
    /// Raw signature bytes.
    pub signature: Vec<u8>,
    /// Public key identifier, `<key-type>:<base64-key-bytes>`.
    pub public_key: String,
}

/// Signs payload digests.
///
/// Implementations must be thread-safe (Send + Sync) if the wallet is shared
/// across concurrent signing calls. No timeout or retry is applied by the
/// caller.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Sign a digest (at least 32 bytes).
    async fn sign(&self, digest: &[u8]) -> Result<SignOutput>;
}

#[async_trait]
impl<T: MessageSigner + ?Sized> MessageSigner for std::sync::Arc<T> {
    async fn sign(&self, digest: &[u8]) -> Result<SignOutput> {
        (**self).sign(digest).await
    }
}

/// In-memory Ed25519 signer.
#[derive(Debug, Clone)]
pub struct KeypairSigner {
    keypair: Keypair,
}

impl KeypairSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load from key material such as `ed25519:<base58>`.
    pub fn from_key_str(key: &str) -> Result<Self> {
        Ok(Self::new(Keypair::from_secret_key_str(key)?))
    }

    /// The public key identifier this signer reports.
    pub fn public_key(&self) -> String {
        self.keypair.public_key().to_key_string()
    }
}

#[async_trait]
impl MessageSigner for KeypairSigner {
    async fn sign(&self, digest: &[u8]) -> Result<SignOutput> {
        let signature = self.keypair.sign(digest);
        Ok(SignOutput {
            signature: signature.as_bytes().to_vec(),
            public_key: self.public_key(),
        })
    }
}
