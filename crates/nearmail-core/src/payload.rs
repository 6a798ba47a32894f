//! Payload: the record that is encoded, hashed, and signed.
//!
//! Plain and structured messages converge on the same [`Payload`] shape.
//! A structured message contributes only its typed-data hash.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::{canonical_bytes, decode_payload, PayloadRecord};
use crate::crypto::Sha256Hash;
use crate::error::{CoreError, Result};
use crate::hasher::hash_message;
use crate::typehash::{NONCE_LEN, SIGN_MESSAGE_TAG};
use crate::types::Mail;

/// The message a caller asks to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    /// Embedded verbatim in the payload.
    Plain(String),
    /// Replaced by [`hash_message`] in the payload.
    Structured(Mail),
}

impl Message {
    /// The string that goes into the payload's `message` field.
    pub fn payload_message(&self) -> Result<String> {
        match self {
            Message::Plain(text) => Ok(text.clone()),
            Message::Structured(mail) => hash_message(mail),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Message::Structured(_))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Plain(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Plain(text.to_string())
    }
}

impl From<Mail> for Message {
    fn from(mail: Mail) -> Self {
        Message::Structured(mail)
    }
}

/// A 32-byte nonce.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce(pub [u8; NONCE_LEN]);

impl Nonce {
    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self.to_hex())
    }
}

impl From<[u8; NONCE_LEN]> for Nonce {
    fn from(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let arr: [u8; NONCE_LEN] = slice.try_into().map_err(|_| CoreError::InvalidNonceLength {
            expected: NONCE_LEN,
            actual: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A validated signable payload.
///
/// The tag is always [`SIGN_MESSAGE_TAG`]; it cannot be set by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    message: String,
    nonce: Nonce,
    recipient: String,
    callback_url: Option<String>,
}

impl Payload {
    pub fn tag(&self) -> u32 {
        SIGN_MESSAGE_TAG
    }

    /// The plain message, or the hex hash of a structured message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// `Some("")` is a present, empty callback and is encoded as such.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    fn to_record(&self) -> PayloadRecord {
        PayloadRecord {
            tag: SIGN_MESSAGE_TAG,
            message: self.message.clone(),
            nonce: self.nonce.0,
            recipient: self.recipient.clone(),
            callback_url: self.callback_url.clone(),
        }
    }

    /// Canonical bytes of this payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        canonical_bytes(&self.to_record())
    }

    /// SHA-256 of the canonical bytes; this is what gets signed.
    pub fn digest(&self) -> Result<Sha256Hash> {
        Ok(Sha256Hash::hash(&self.to_bytes()?))
    }

    /// Decode canonical bytes back into a payload.
    ///
    /// Bytes carrying any tag other than [`SIGN_MESSAGE_TAG`] are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let record = decode_payload(bytes)?;
        if record.tag != SIGN_MESSAGE_TAG {
            return Err(CoreError::Decoding(format!(
                "unexpected payload tag: {}",
                record.tag
            )));
        }
        Ok(Self {
            message: record.message,
            nonce: Nonce(record.nonce),
            recipient: record.recipient,
            callback_url: record.callback_url,
        })
    }
}

/// Builder for creating payloads.
pub struct PayloadBuilder {
    message: Message,
    nonce: Option<Vec<u8>>,
    recipient: String,
    callback_url: Option<String>,
}

impl PayloadBuilder {
    /// Start building a payload.
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            nonce: None,
            recipient: String::new(),
            callback_url: None,
        }
    }

    /// Set the recipient.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Set the nonce. Its length is checked in [`Self::build`].
    pub fn nonce(mut self, nonce: impl AsRef<[u8]>) -> Self {
        self.nonce = Some(nonce.as_ref().to_vec());
        self
    }

    /// Set the callback URL.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set or clear the callback URL.
    pub fn maybe_callback_url(mut self, url: Option<String>) -> Self {
        self.callback_url = url;
        self
    }

    /// Validate the nonce, hash a structured message, and assemble the
    /// payload.
    pub fn build(self) -> Result<Payload> {
        let raw = self.nonce.unwrap_or_default();
        // Nonce is validated before any hashing happens
        let nonce = Nonce::try_from(raw.as_slice())?;
        let message = self.message.payload_message()?;

        Ok(Payload {
            message,
            nonce,
            recipient: self.recipient,
            callback_url: self.callback_url,
        })
    }
}
