//! The Wallet: turns sign-message requests into authentication tokens.
//!
//! ```text
//! validate nonce -> build payload (hashing a structured message)
//!   -> canonical bytes -> SHA-256 -> signer -> token
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use nearmail_core::{AuthenticationToken, Message, Payload, PayloadBuilder};
use serde::Deserialize;

use crate::config::WalletConfig;
use crate::error::Result;
use crate::signer::MessageSigner;

/// A request to sign a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMessageParams {
    /// The message to transmit, plain or structured.
    pub message: Message,
    /// The recipient (e.g. "alice.near" or "myapp.com").
    pub recipient: String,
    /// Must be exactly 32 bytes.
    pub nonce: Vec<u8>,
    /// Optional callback URL. `Some("")` is kept as present-and-empty.
    #[serde(default)]
    pub callback_url: Option<String>,
}

impl SignMessageParams {
    pub fn new(
        message: impl Into<Message>,
        recipient: impl Into<String>,
        nonce: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            message: message.into(),
            recipient: recipient.into(),
            nonce: nonce.as_ref().to_vec(),
            callback_url: None,
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

/// Signs messages on behalf of one account.
///
/// Holds no mutable state; concurrent calls are independent as long as the
/// signer tolerates concurrent use.
pub struct Wallet<S: MessageSigner> {
    account_id: String,
    signer: S,
    config: WalletConfig,
}

impl<S: MessageSigner> Wallet<S> {
    /// Create a new wallet.
    pub fn new(account_id: impl Into<String>, signer: S, config: WalletConfig) -> Self {
        Self {
            account_id: account_id.into(),
            signer,
            config,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Build the payload a request would sign, without signing it.
    ///
    /// Fails on a nonce that is not exactly 32 bytes before anything is
    /// hashed. The callback URL is taken as given: an omitted one is encoded
    /// as absent.
    pub fn prepare(&self, params: &SignMessageParams) -> Result<Payload> {
        let payload = PayloadBuilder::new(params.message.clone())
            .recipient(params.recipient.as_str())
            .nonce(&params.nonce)
            .maybe_callback_url(params.callback_url.clone())
            .build()?;
        Ok(payload)
    }

    /// Sign a message and return the authentication token.
    pub async fn sign_message(&self, params: SignMessageParams) -> Result<AuthenticationToken> {
        let payload = self.prepare(&params)?;
        let digest = payload.digest()?;

        if self.config.log_payloads {
            tracing::debug!(
                tag = payload.tag(),
                message = payload.message(),
                structured = params.message.is_structured(),
                nonce = %payload.nonce().to_hex(),
                recipient = payload.recipient(),
                callback_url = ?payload.callback_url(),
                digest = %digest,
                "signing payload"
            );
        }

        let output = match self.signer.sign(digest.as_bytes()).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Signer failed for {}: {}", self.account_id, e);
                return Err(e.into());
            }
        };

        Ok(AuthenticationToken {
            account_id: self.account_id.clone(),
            public_key: output.public_key,
            signature: BASE64.encode(&output.signature),
        })
    }
}
