//! # NEARMail
//!
//! Off-chain structured message signing. A caller supplies a message (plain
//! text or a structured [`Mail`]), a recipient, a 32-byte nonce and an
//! optional callback URL; the [`Wallet`] builds the canonical payload,
//! hashes it, has a [`MessageSigner`] sign the digest, and returns an
//! [`AuthenticationToken`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nearmail::{KeypairSigner, Wallet, WalletConfig, SignMessageParams};
//!
//! async fn example() -> nearmail::Result<()> {
//!     let signer = KeypairSigner::from_key_str("ed25519:...")?;
//!     let wallet = Wallet::new("alice.near", signer, WalletConfig::default());
//!
//!     let token = wallet
//!         .sign_message(SignMessageParams::new("hello", "myapp.com", [0u8; 32]))
//!         .await?;
//!     println!("{}", serde_json::to_string(&token).unwrap());
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `nearmail::core` - Encoding, hashing and payload primitives

pub mod config;
pub mod error;
pub mod signer;
pub mod wallet;

pub use nearmail_core as core;

pub use config::WalletConfig;
pub use error::{Result, SignerError, WalletError};
pub use signer::{KeypairSigner, MessageSigner, SignOutput};
pub use wallet::{SignMessageParams, Wallet};

// Re-export commonly used core types
pub use nearmail_core::{
    hash_mail, hash_message, hash_person, AuthenticationToken, Keypair, Mail, Message, Payload,
    Person,
};
