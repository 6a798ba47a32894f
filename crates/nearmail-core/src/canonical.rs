//! Canonical Borsh encoding for deterministic serialization.
//!
//! Every signed or hashed record is a Borsh struct whose field declaration
//! order IS the wire order:
//! - Fixed-width integers: little-endian, fixed width
//! - Strings: u32 LE byte length, then UTF-8 bytes
//! - Fixed arrays: raw bytes, no length prefix
//! - Options: one presence byte (0 = absent, 1 = present), then the value
//!
//! **CRITICAL**: This layout is FROZEN. Reordering a field breaks every
//! signature against the reference layout.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{CoreError, Result};

/// The signable payload.
///
/// Layout: `u32 tag | string message | [u8; 32] nonce | string recipient |
/// option<string> callback_url`
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PayloadRecord {
    pub tag: u32,
    pub message: String,
    pub nonce: [u8; 32],
    pub recipient: String,
    pub callback_url: Option<String>,
}

/// Layout: `[u8; 32] typehash | string name | string wallet`
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PersonRecord {
    pub typehash: [u8; 32],
    pub name: String,
    pub wallet: String,
}

/// Layout: `[u8; 32] typehash | string hash_from | string hash_to | string hash_contents`
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MailRecord {
    pub typehash: [u8; 32],
    pub hash_from: String,
    pub hash_to: String,
    pub hash_contents: String,
}

/// Layout: `[u8; 32] typehash | string hash_mail`
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MessageRecord {
    pub typehash: [u8; 32],
    pub hash_mail: String,
}

/// Encode a record to canonical bytes.
pub fn canonical_bytes<T: BorshSerialize>(record: &T) -> Result<Vec<u8>> {
    borsh::to_vec(record).map_err(|e| CoreError::Encoding(e.to_string()))
}

/// Decode a payload from canonical bytes.
///
/// Trailing bytes and non-UTF-8 strings are rejected.
pub fn decode_payload(bytes: &[u8]) -> Result<PayloadRecord> {
    borsh::from_slice(bytes).map_err(|e| CoreError::Decoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typehash::SIGN_MESSAGE_TAG;

    fn nonce() -> [u8; 32] {
        let mut n = [0u8; 32];
        for (i, b) in n.iter_mut().enumerate() {
            *b = i as u8;
        }
        n
    }

    fn payload(callback_url: Option<&str>) -> PayloadRecord {
        PayloadRecord {
            tag: SIGN_MESSAGE_TAG,
            message: "bye".into(),
            nonce: nonce(),
            recipient: "giparktest.testnet".into(),
            callback_url: callback_url.map(String::from),
        }
    }

    #[test]
    fn test_payload_layout_field_by_field() {
        let bytes = canonical_bytes(&payload(Some(""))).unwrap();

        // tag
        assert_eq!(&bytes[0..4], &[0x9d, 0x01, 0x00, 0x80]);
        // message: len 3 + "bye"
        assert_eq!(&bytes[4..8], &3u32.to_le_bytes());
        assert_eq!(&bytes[8..11], b"bye");
        // nonce, raw
        assert_eq!(&bytes[11..43], &nonce());
        // recipient
        assert_eq!(&bytes[43..47], &18u32.to_le_bytes());
        assert_eq!(&bytes[47..65], b"giparktest.testnet");
        // callback: present, empty
        assert_eq!(&bytes[65..], &[1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_optional_present_vs_absent() {
        let absent = canonical_bytes(&payload(None)).unwrap();
        let present = canonical_bytes(&payload(Some("https://example.com/cb"))).unwrap();

        let prefix = absent.len() - 1;
        assert_eq!(&absent[..prefix], &present[..prefix]);
        assert_eq!(absent[prefix], 0);
        assert_eq!(present[prefix], 1);

        let mut tail = 22u32.to_le_bytes().to_vec();
        tail.extend_from_slice(b"https://example.com/cb");
        assert_eq!(&present[prefix + 1..], &tail[..]);
    }

    #[test]
    fn test_empty_callback_is_not_absent() {
        let absent = canonical_bytes(&payload(None)).unwrap();
        let empty = canonical_bytes(&payload(Some(""))).unwrap();
        assert_ne!(absent, empty);
        assert_eq!(empty.len(), absent.len() + 4);
    }

    #[test]
    fn test_decode_reconstructs_payload() {
        for cb in [None, Some(""), Some("https://example.com")] {
            let original = payload(cb);
            let bytes = canonical_bytes(&original).unwrap();
            assert_eq!(decode_payload(&bytes).unwrap(), original);
        }
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = canonical_bytes(&payload(None)).unwrap();
        bytes.push(0xff);
        assert!(matches!(decode_payload(&bytes), Err(CoreError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let bytes = canonical_bytes(&payload(Some("cb"))).unwrap();
        assert!(decode_payload(&bytes[..bytes.len() - 1]).is_err());
        assert!(decode_payload(&[]).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let mut bytes = canonical_bytes(&payload(None)).unwrap();
        // Corrupt the first byte of "bye"
        bytes[8] = 0xff;
        assert!(matches!(decode_payload(&bytes), Err(CoreError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_bad_presence_flag() {
        let mut bytes = canonical_bytes(&payload(None)).unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 2;
        assert!(decode_payload(&bytes).is_err());
    }

    #[test]
    fn test_person_record_layout() {
        let record = PersonRecord {
            typehash: [0xab; 32],
            name: "n".into(),
            wallet: "w".into(),
        };
        let bytes = canonical_bytes(&record).unwrap();
        assert_eq!(bytes.len(), 32 + 4 + 1 + 4 + 1);
        assert_eq!(&bytes[..32], &[0xab; 32]);
        assert_eq!(&bytes[32..37], &[1, 0, 0, 0, b'n']);
        assert_eq!(&bytes[37..], &[1, 0, 0, 0, b'w']);
    }

    #[test]
    fn test_field_order_matters() {
        let a = MailRecord {
            typehash: [0; 32],
            hash_from: "a".into(),
            hash_to: "b".into(),
            hash_contents: "c".into(),
        };
        let b = MailRecord {
            hash_from: "b".into(),
            hash_to: "a".into(),
            ..a.clone()
        };
        assert_ne!(canonical_bytes(&a).unwrap(), canonical_bytes(&b).unwrap());
    }
}
