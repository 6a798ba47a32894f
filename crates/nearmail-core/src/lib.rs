//! # NEARMail Core
//!
//! Pure primitives for NEARMail message signing: canonical encoding,
//! typed-data hashing, and signable payload construction.
//!
//! This crate contains no I/O and no async. It is pure computation over
//! byte layouts that must match the reference wire format exactly.
//!
//! ## Key Types
//!
//! - [`Payload`] - The signable record (tag, message, nonce, recipient, callback)
//! - [`PayloadBuilder`] - Validates inputs and assembles a [`Payload`]
//! - [`Message`] - Plain-text or structured ([`Mail`]) message
//! - [`AuthenticationToken`] - The `{accountId, publicKey, signature}` result
//!
//! ## Canonicalization
//!
//! All records are encoded with Borsh. See the [`canonical`] module for the
//! wire records and [`hasher`] for the nested typed-data composition.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod hasher;
pub mod payload;
pub mod token;
pub mod typehash;
pub mod types;

pub use canonical::{canonical_bytes, decode_payload, PayloadRecord};
pub use crypto::{Ed25519PublicKey, Ed25519Signature, KeyType, Keypair, Sha256Hash};
pub use error::{CoreError, Result};
pub use hasher::{hash_domain, hash_mail, hash_message, hash_person};
pub use payload::{Message, Nonce, Payload, PayloadBuilder};
pub use token::AuthenticationToken;
pub use typehash::{
    DOMAIN_SEPARATOR, DOMAIN_TYPEHASH, MAIL_TYPEHASH, NONCE_LEN, PERSON_TYPEHASH,
    SIGN_MESSAGE_TAG,
};
pub use types::{Domain, Mail, Person};
