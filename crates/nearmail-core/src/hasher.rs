//! Typed-data hashing for structured messages.
//!
//! Each stage hashes its string inputs, wraps the hex digests with a fixed
//! type hash, encodes the record canonically, and hashes the bytes:
//!
//! ```text
//! hash_person  = H(borsh{PERSON_TYPEHASH, hex H(name), hex H(wallet)})
//! hash_mail    = H(borsh{MAIL_TYPEHASH, hash_person(from), hash_person(to), hex H(contents)})
//! hash_message = H(borsh{DOMAIN_SEPARATOR, hash_mail})
//! ```
//!
//! `H` is SHA-256 everywhere; every intermediate digest travels as a
//! 64-character lowercase hex string.
//!
//! Domain hashing is the exception. It concatenates raw 32-byte digests and
//! encodes the result as a single byte vector:
//!
//! ```text
//! hash_domain = H(borsh<Vec<u8>>(DOMAIN_TYPEHASH || H(name) || H(version) || H(chain_id) || H(verifying_contract)))
//! ```

use borsh::BorshSerialize;

use crate::canonical::{canonical_bytes, MailRecord, MessageRecord, PersonRecord};
use crate::crypto::Sha256Hash;
use crate::error::Result;
use crate::typehash::{DOMAIN_SEPARATOR, DOMAIN_TYPEHASH, MAIL_TYPEHASH, PERSON_TYPEHASH};
use crate::types::{Domain, Mail, Person};

fn hash_str(s: &str) -> String {
    Sha256Hash::hash(s.as_bytes()).to_hex()
}

fn hash_record<T: BorshSerialize>(record: &T) -> Result<String> {
    let bytes = canonical_bytes(record)?;
    Ok(Sha256Hash::hash(&bytes).to_hex())
}

/// Hash a [`Person`] under [`PERSON_TYPEHASH`].
pub fn hash_person(person: &Person) -> Result<String> {
    hash_record(&PersonRecord {
        typehash: PERSON_TYPEHASH,
        name: hash_str(&person.name),
        wallet: hash_str(&person.wallet),
    })
}

/// Hash a [`Mail`] under [`MAIL_TYPEHASH`].
///
/// `from` and `to` are hashed independently, so swapping them changes the
/// result.
pub fn hash_mail(mail: &Mail) -> Result<String> {
    hash_record(&MailRecord {
        typehash: MAIL_TYPEHASH,
        hash_from: hash_person(&mail.from)?,
        hash_to: hash_person(&mail.to)?,
        hash_contents: hash_str(&mail.contents),
    })
}

/// Hash a [`Mail`] as a top-level message under [`DOMAIN_SEPARATOR`].
///
/// This is the value that stands in for a structured message in the
/// signable payload.
pub fn hash_message(mail: &Mail) -> Result<String> {
    hash_record(&MessageRecord {
        typehash: DOMAIN_SEPARATOR,
        hash_mail: hash_mail(mail)?,
    })
}

/// Hash a [`Domain`] under [`DOMAIN_TYPEHASH`].
///
/// Produces the separator a deployment would embed in place of
/// [`DOMAIN_SEPARATOR`].
pub fn hash_domain(domain: &Domain) -> Result<String> {
    let mut input = Vec::with_capacity(32 * 5);
    input.extend_from_slice(&DOMAIN_TYPEHASH);
    for field in [
        &domain.name,
        &domain.version,
        &domain.chain_id,
        &domain.verifying_contract,
    ] {
        input.extend_from_slice(Sha256Hash::hash(field.as_bytes()).as_bytes());
    }
    hash_record(&input)
}
