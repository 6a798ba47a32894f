//! Structured message types.
//!
//! A [`Mail`] is the structured message variant; it is never embedded in a
//! payload directly, only its typed-data hash is.

use serde::{Deserialize, Serialize};

/// A named party identified by an account handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub wallet: String,
}

impl Person {
    pub fn new(name: impl Into<String>, wallet: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wallet: wallet.into(),
        }
    }
}

/// A structured mail message between two parties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mail {
    pub from: Person,
    pub to: Person,
    pub contents: String,
}

impl Mail {
    pub fn new(from: Person, to: Person, contents: impl Into<String>) -> Self {
        Self {
            from,
            to,
            contents: contents.into(),
        }
    }
}

/// Describes a signing domain (application, version, chain, contract).
///
/// Hashing a domain with [`crate::hash_domain`] yields a separator for a
/// specific deployment. Message hashing always uses the fixed
/// [`crate::DOMAIN_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: String,
    pub verifying_contract: String,
}
