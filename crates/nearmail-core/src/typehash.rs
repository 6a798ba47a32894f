//! Protocol constants: record type hashes, the domain separator, and the
//! sign-message tag.
//!
//! **CRITICAL**: These values are FROZEN. Changing any byte produces
//! signatures no external verifier will accept.

/// SHA-256 of
/// `EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)`.
pub const DOMAIN_TYPEHASH: [u8; 32] = [
    198, 59, 48, 83, 117, 35, 182, 76, 53, 33, 226, 87, 66, 137, 235, 230, 230, 134, 35, 176, 229,
    204, 101, 238, 119, 187, 26, 87, 155, 227, 67, 239,
];

/// SHA-256 of `Person(string name,address wallet)`.
pub const PERSON_TYPEHASH: [u8; 32] = [
    11, 175, 250, 237, 110, 96, 120, 229, 28, 102, 40, 124, 59, 106, 84, 249, 87, 238, 156, 1, 219,
    126, 140, 71, 170, 107, 179, 159, 22, 4, 138, 213,
];

/// SHA-256 of
/// `Mail(Person from,Person to,string contents)Person(string name,address wallet)`.
pub const MAIL_TYPEHASH: [u8; 32] = [
    123, 96, 125, 176, 215, 143, 52, 177, 90, 173, 182, 32, 26, 61, 220, 53, 155, 135, 6, 4, 126,
    196, 195, 186, 217, 183, 8, 200, 246, 202, 98, 175,
];

/// Top-level separator scoping every message hash to the NEARMail domain.
pub const DOMAIN_SEPARATOR: [u8; 32] = [
    236, 186, 149, 206, 28, 208, 103, 29, 234, 94, 209, 25, 153, 238, 4, 68, 253, 236, 78, 68, 86,
    169, 6, 113, 51, 216, 182, 56, 114, 196, 230, 89,
];

/// Payload discriminant: 2^31 + 413.
pub const SIGN_MESSAGE_TAG: u32 = (1u32 << 31) + 413;

/// Required nonce length in bytes.
pub const NONCE_LEN: usize = 32;
