// src/lib.rs
//! envelope-kit — a small cryptographic envelope toolkit
//!
//! Features:
//! - AES-GCM authenticated encryption with hex envelopes
//! - RSA-OAEP (SHA-256) public-key encryption for small payloads
//! - SHA-256 checksums and HMAC-SHA256 authentication tags
//! - Legacy AES-CFB streaming mode, unauthenticated, kept for throughput
//!   comparison
//!
//! Every operation is a pure transform of its explicit inputs: keys are
//! supplied by the caller on each call and are never cached, persisted, or
//! logged. Operations that consume randomness have a `*_with` variant taking
//! any `rand_core::CryptoRngCore`, so tests can inject a deterministic
//! generator; the plain-named variants use the OS CSPRNG.

pub mod aead;
pub mod asym;
pub mod consts;
pub mod integrity;
pub mod key_ops;
pub mod legacy;

mod envelope;

pub mod error;

// Re-export everything users need at the crate root
pub use error::CryptoError;
pub use key_ops::{
    generate_key_pair, generate_symmetric_key, key_representations, KeyPair, KeyRepr, SymmetricKey,
};
