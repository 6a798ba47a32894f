//! Golden test vectors.
//!
//! Digests and signatures recorded against the reference NEAR key. Any
//! conforming implementation must reproduce them byte for byte.

use nearmail_core::{Keypair, Message, PayloadBuilder, Result};

use crate::fixtures::{counting_nonce, sample_mail};

/// NEAR secret key used for every vector (`ed25519:<base58(seed || public)>`).
pub const REFERENCE_SECRET_KEY: &str = "ed25519:2CH8v4LQD2o4RDoMx1ZXuo6mJCPNbDCyXHMhirLdotMW714ZxuWxjxxtZ6tMRmarudrNMjR18jQofp5F8obSMWwc";

/// Public key of [`REFERENCE_SECRET_KEY`] as carried in tokens.
pub const REFERENCE_PUBLIC_KEY: &str = "ed25519:0l9TG1AldI8L07/DwbkhcSIAAmZTa9Tv7mCzOmjOpWM=";

/// Recipient used by every vector.
pub const REFERENCE_RECIPIENT: &str = "giparktest.testnet";

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    pub name: &'static str,
    pub description: &'static str,
    pub message: Message,
    pub callback_url: Option<&'static str>,
    /// Canonical payload bytes (hex), when recorded.
    pub expected_bytes: Option<&'static str>,
    /// SHA-256 of the payload (hex).
    pub expected_digest: &'static str,
    /// Signature over the digest (base64).
    pub expected_signature: &'static str,
}

impl GoldenVector {
    /// Recompute `(digest_hex, signature_b64, bytes_hex)` for this vector.
    pub fn compute(&self) -> Result<(String, String, String)> {
        let keypair = Keypair::from_secret_key_str(REFERENCE_SECRET_KEY)?;
        let payload = PayloadBuilder::new(self.message.clone())
            .recipient(REFERENCE_RECIPIENT)
            .nonce(counting_nonce())
            .maybe_callback_url(self.callback_url.map(String::from))
            .build()?;

        let bytes = payload.to_bytes()?;
        let digest = payload.digest()?;
        let signature = keypair.sign(digest.as_bytes());
        Ok((digest.to_hex(), signature.to_base64(), hex::encode(bytes)))
    }

    /// True if everything recomputed matches what was recorded.
    pub fn verify(&self) -> bool {
        match self.compute() {
            Ok((digest, signature, bytes)) => {
                digest == self.expected_digest
                    && signature == self.expected_signature
                    && self.expected_bytes.map_or(true, |b| b == bytes)
            }
            Err(_) => false,
        }
    }
}

pub fn plain_bye() -> GoldenVector {
    GoldenVector {
        name: "plain_bye",
        description: "Plain message with an empty, present callback",
        message: Message::Plain("bye".into()),
        callback_url: Some(""),
        expected_bytes: Some(
            "9d01008003000000627965000102030405060708090a0b0c0d0e0f10111213141516171819\
             1a1b1c1d1e1f1200000067697061726b746573742e746573746e65740100000000",
        ),
        expected_digest: "db1a4e949fda9a0e89badce6eb5c0234720c2a07fa670ecf21ee160e69a3a998",
        expected_signature: "eWSmjlW2FniQxCVdGhZo6j1hgT4ZGjp+wea7/ncS5m8ur5O4LqzWF54BUfyL+qMGR/dCnVs1UswdD4H+aDvkDw==",
    }
}

pub fn plain_bye_no_callback() -> GoldenVector {
    GoldenVector {
        name: "plain_bye_no_callback",
        description: "Plain message with the callback absent",
        message: Message::Plain("bye".into()),
        callback_url: None,
        expected_bytes: None,
        expected_digest: "b779aaf0cb66df835a7f0cf478e092075243b8a34e14200c3b5d4566ce1a6deb",
        expected_signature: "3MZKGI71MHqJqKkkbMrdw9ag+M0TO90nJ3jmNAvi2dsVR+lEYVpH0/sOpuNrq2lCh6cJ7azyf3qxKn95j8uyCw==",
    }
}

pub fn structured_mail() -> GoldenVector {
    GoldenVector {
        name: "structured_mail",
        description: "gipark -> gipark2 \"Hi\" with an empty, present callback",
        message: Message::Structured(sample_mail()),
        callback_url: Some(""),
        expected_bytes: None,
        expected_digest: "343e6937551965fd9a5e6aea3d289ea7468e39add020174a3c7ebab674949a31",
        expected_signature: "m6OSk/cta8lFhpjFGPKsovW1hbDb7V3GagbHjA1/evQUpCePtmipplNE6t40Rr8g6WeawJr0LGAmuCiDD8J0BQ==",
    }
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![plain_bye(), plain_bye_no_callback(), structured_mail()]
}

/// Check every vector, returning `(name, ok, computed_digest)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = v
                .compute()
                .map(|(d, _, _)| d)
                .unwrap_or_else(|e| format!("error: {e}"));
            (v.name.to_string(), v.verify(), digest)
        })
        .collect()
}
