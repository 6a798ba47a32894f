//! End-to-end golden vectors for cross-implementation verification.
//!
//! Every implementation must produce the same values for the reference key:
//! - payload bytes and digest
//! - signature (deterministic Ed25519, base64)
//! - public key identifier

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use nearmail::{
    hash_message, AuthenticationToken, KeypairSigner, Mail, Person, SignMessageParams, Wallet,
    WalletConfig,
};

const SECRET_KEY: &str = "ed25519:2CH8v4LQD2o4RDoMx1ZXuo6mJCPNbDCyXHMhirLdotMW714ZxuWxjxxtZ6tMRmarudrNMjR18jQofp5F8obSMWwc";
const ACCOUNT_ID: &str = "dev-1679374959912-95659865680232";
const PUBLIC_KEY: &str = "ed25519:0l9TG1AldI8L07/DwbkhcSIAAmZTa9Tv7mCzOmjOpWM=";
const RECIPIENT: &str = "giparktest.testnet";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn nonce() -> Vec<u8> {
    (0u8..32).collect()
}

fn wallet() -> Wallet<KeypairSigner> {
    let signer = KeypairSigner::from_key_str(SECRET_KEY).unwrap();
    Wallet::new(ACCOUNT_ID, signer, WalletConfig::default())
}

fn mail() -> Mail {
    Mail::new(
        Person::new("gipark", "giparktest.testnet"),
        Person::new("gipark2", "gipark2.testnet"),
        "Hi",
    )
}

/// Check the token's signature against its own public key and the digest.
fn assert_verifies(token: &AuthenticationToken, digest: &[u8]) {
    let key_b64 = token.public_key.strip_prefix("ed25519:").unwrap();
    let key_bytes: [u8; 32] = BASE64.decode(key_b64).unwrap().try_into().unwrap();
    let sig_bytes: [u8; 64] = BASE64.decode(&token.signature).unwrap().try_into().unwrap();

    let key = VerifyingKey::from_bytes(&key_bytes).unwrap();
    key.verify(digest, &Signature::from_bytes(&sig_bytes))
        .expect("signature must verify");
}

#[tokio::test]
async fn golden_plain_with_empty_callback() {
    init_tracing();
    let wallet = wallet();
    let params = SignMessageParams::new("bye", RECIPIENT, nonce()).with_callback_url("");

    let payload = wallet.prepare(&params).unwrap();
    assert_eq!(
        hex::encode(payload.to_bytes().unwrap()),
        "9d01008003000000627965000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f1200000067697061726b746573742e746573746e65740100000000"
    );
    let digest = payload.digest().unwrap();
    assert_eq!(
        digest.to_hex(),
        "db1a4e949fda9a0e89badce6eb5c0234720c2a07fa670ecf21ee160e69a3a998"
    );

    let token = wallet.sign_message(params).await.unwrap();
    assert_eq!(token.account_id, ACCOUNT_ID);
    assert_eq!(token.public_key, PUBLIC_KEY);
    assert_eq!(
        token.signature,
        "eWSmjlW2FniQxCVdGhZo6j1hgT4ZGjp+wea7/ncS5m8ur5O4LqzWF54BUfyL+qMGR/dCnVs1UswdD4H+aDvkDw=="
    );
    assert_verifies(&token, digest.as_bytes());
}

#[tokio::test]
async fn golden_plain_without_callback() {
    init_tracing();
    let wallet = wallet();
    let params = SignMessageParams::new("bye", RECIPIENT, nonce());

    let digest = wallet.prepare(&params).unwrap().digest().unwrap();
    assert_eq!(
        digest.to_hex(),
        "b779aaf0cb66df835a7f0cf478e092075243b8a34e14200c3b5d4566ce1a6deb"
    );

    let token = wallet.sign_message(params).await.unwrap();
    assert_eq!(
        token.signature,
        "3MZKGI71MHqJqKkkbMrdw9ag+M0TO90nJ3jmNAvi2dsVR+lEYVpH0/sOpuNrq2lCh6cJ7azyf3qxKn95j8uyCw=="
    );
    assert_verifies(&token, digest.as_bytes());
}

#[tokio::test]
async fn golden_structured_mail() {
    init_tracing();
    let wallet = wallet();
    let params = SignMessageParams::new(mail(), RECIPIENT, nonce()).with_callback_url("");

    let payload = wallet.prepare(&params).unwrap();
    assert_eq!(
        payload.message(),
        "31e150ca69cf2ea78220d4c08e8b6715af3f75ff64f0fb82b446634f819db4db"
    );
    assert_eq!(payload.message(), hash_message(&mail()).unwrap());

    let digest = payload.digest().unwrap();
    assert_eq!(
        digest.to_hex(),
        "343e6937551965fd9a5e6aea3d289ea7468e39add020174a3c7ebab674949a31"
    );

    let token = wallet.sign_message(params).await.unwrap();
    assert_eq!(
        token.signature,
        "m6OSk/cta8lFhpjFGPKsovW1hbDb7V3GagbHjA1/evQUpCePtmipplNE6t40Rr8g6WeawJr0LGAmuCiDD8J0BQ=="
    );
    assert_verifies(&token, digest.as_bytes());
}

#[tokio::test]
async fn signing_is_deterministic() {
    let wallet = wallet();
    let params = SignMessageParams::new(mail(), RECIPIENT, nonce());

    let a = wallet.sign_message(params.clone()).await.unwrap();
    let b = wallet.sign_message(params).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn token_serializes_camel_case() {
    let token = wallet()
        .sign_message(SignMessageParams::new("bye", RECIPIENT, nonce()))
        .await
        .unwrap();

    let json = serde_json::to_value(&token).unwrap();
    assert_eq!(json["accountId"], ACCOUNT_ID);
    assert_eq!(json["publicKey"], PUBLIC_KEY);
    assert!(json["signature"].is_string());
}

#[tokio::test]
async fn wrong_nonce_length_rejected() {
    let wallet = wallet();
    let err = wallet
        .sign_message(SignMessageParams::new("bye", RECIPIENT, [0u8; 31]))
        .await
        .unwrap_err();
    assert!(err.is_precondition());
}
