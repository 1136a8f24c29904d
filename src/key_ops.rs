// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles secure key generation and
//! multiple representations (hex, base64, etc.) for keys.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::consts::DEFAULT_RSA_BITS;
use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// A caller-owned symmetric key, wiped from memory on drop
pub type SymmetricKey = Zeroizing<Vec<u8>>;

/// Generate a random symmetric key of `size_bytes` from the OS CSPRNG
pub fn generate_symmetric_key(size_bytes: usize) -> Result<SymmetricKey> {
    generate_symmetric_key_with(&mut OsRng, size_bytes)
}

/// Same as [`generate_symmetric_key`], drawing from a caller-supplied CSPRNG
pub fn generate_symmetric_key_with<R: CryptoRngCore>(
    rng: &mut R,
    size_bytes: usize,
) -> Result<SymmetricKey> {
    let mut key = Zeroizing::new(vec![0u8; size_bytes]);
    rng.try_fill_bytes(key.as_mut_slice())?;
    Ok(key)
}

/// An RSA key pair. The private half never leaves this struct in any
/// serialized form; the public half may be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct KeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl KeyPair {
    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }
}

/// Generate a 2048-bit RSA key pair from the OS CSPRNG
///
/// Prime search makes this by far the slowest operation in the crate — it
/// typically finishes well under a second but has no bounded worst case.
/// Keep it off latency-sensitive paths.
pub fn generate_key_pair() -> Result<KeyPair> {
    generate_key_pair_with(&mut OsRng, DEFAULT_RSA_BITS)
}

/// Same as [`generate_key_pair`], with explicit modulus size and CSPRNG
pub fn generate_key_pair_with<R: CryptoRngCore>(rng: &mut R, bits: usize) -> Result<KeyPair> {
    debug!(bits, "generating RSA key pair");
    let private =
        RsaPrivateKey::new(rng, bits).map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    let public = RsaPublicKey::from(&private);
    Ok(KeyPair { private, public })
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &[u8]) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key),
        base64: STANDARD.encode(key),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key),
    }
}
