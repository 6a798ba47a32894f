//! Test fixtures and mock signers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use nearmail::{KeypairSigner, MessageSigner, SignOutput, SignerError, Wallet, WalletConfig};
use nearmail_core::{Keypair, Mail, Payload, PayloadBuilder, Person};

/// The nonce `[0, 1, 2, ..., 31]`.
pub fn counting_nonce() -> Vec<u8> {
    (0u8..32).collect()
}

/// The reference structured message.
pub fn sample_mail() -> Mail {
    Mail::new(
        Person::new("gipark", "giparktest.testnet"),
        Person::new("gipark2", "gipark2.testnet"),
        "Hi",
    )
}

/// A signer that records every digest it is asked to sign.
pub struct RecordingSigner {
    inner: KeypairSigner,
    digests: Mutex<Vec<Vec<u8>>>,
}

impl RecordingSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            inner: KeypairSigner::new(keypair),
            digests: Mutex::new(Vec::new()),
        }
    }

    // A panic elsewhere must not hide recorded calls.
    fn recorded(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.digests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of sign calls so far.
    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    /// Digests seen so far, in call order.
    pub fn digests(&self) -> Vec<Vec<u8>> {
        self.recorded().clone()
    }
}

#[async_trait]
impl MessageSigner for RecordingSigner {
    async fn sign(&self, digest: &[u8]) -> Result<SignOutput, SignerError> {
        self.recorded().push(digest.to_vec());
        self.inner.sign(digest).await
    }
}

/// A signer that always fails, counting attempts.
#[derive(Default)]
pub struct FailingSigner {
    attempts: AtomicUsize,
}

impl FailingSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSigner for FailingSigner {
    async fn sign(&self, _digest: &[u8]) -> Result<SignOutput, SignerError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SignerError::Backend("hardware key unavailable".into()))
    }
}

/// A deterministic wallet backed by a [`RecordingSigner`].
pub struct TestFixture {
    pub keypair: Keypair,
    pub wallet: Wallet<RecordingSigner>,
}

impl TestFixture {
    /// Create a fixture with a fixed seed (`0x42`).
    pub fn new() -> Self {
        Self::with_seed([0x42; 32])
    }

    /// Create a fixture with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let keypair = Keypair::from_seed(&seed);
        let wallet = Wallet::new(
            "fixture.testnet",
            RecordingSigner::new(keypair.clone()),
            WalletConfig::default(),
        );
        Self { keypair, wallet }
    }

    /// The signer behind the wallet.
    pub fn signer(&self) -> &RecordingSigner {
        self.wallet.signer()
    }

    /// A plain-message payload for `fixture.testnet` with no callback.
    pub fn plain_payload(&self, message: &str, nonce: &[u8]) -> Payload {
        PayloadBuilder::new(message)
            .recipient("fixture.testnet")
            .nonce(nonce)
            .build()
            .expect("fixture nonce must be 32 bytes")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
