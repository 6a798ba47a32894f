//! # NEARMail Testkit
//!
//! Testing utilities for NEARMail.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Recorded digests and signatures for cross-implementation checks
//! - **Generators**: Proptest strategies for people, mail, and sign requests
//! - **Fixtures**: Deterministic wallets and mock signers that record or fail calls
//!
//! ## Golden Vectors
//!
//! ```rust
//! use nearmail_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, digest) in verify_all_vectors() {
//!     assert!(ok, "{name}: {digest}");
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use nearmail_testkit::fixtures::{counting_nonce, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let payload = fixture.plain_payload("hello", &counting_nonce());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{counting_nonce, sample_mail, FailingSigner, RecordingSigner, TestFixture};
pub use generators::{sign_params, SignParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, REFERENCE_SECRET_KEY};
