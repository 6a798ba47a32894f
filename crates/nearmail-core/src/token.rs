//! The authentication token returned to a relying party.

use serde::{Deserialize, Serialize};

/// Proof that `account_id` signed a payload with `public_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationToken {
    /// The account name as plain text (e.g. "alice.near").
    pub account_id: String,
    /// `<key-type>:<base64-key-bytes>`
    pub public_key: String,
    /// Base64 of the raw signature bytes.
    pub signature: String,
}
