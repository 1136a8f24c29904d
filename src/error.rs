// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("unsupported AES key length: {len} bytes (expected 16, 24, or 32)")]
    KeySize { len: usize },

    #[error("secure random source failed: {0}")]
    Randomness(#[from] rand_core::Error),

    #[error("malformed envelope: {0}")]
    Encoding(String),

    /// AEAD tag verification failed — tampered envelope or wrong key.
    /// Retrying with the same inputs cannot succeed.
    #[error("authentication failed: envelope rejected")]
    Authentication,

    #[error("plaintext of {len} bytes exceeds the cipher's capacity of {max} bytes")]
    PlaintextTooLarge { len: usize, max: usize },

    /// OAEP unpadding failed. Deliberately carries no cause: distinguishable
    /// padding errors would open a padding-oracle channel.
    #[error("asymmetric decryption failed")]
    Decryption,

    #[error("key pair generation failed: {0}")]
    KeyGeneration(String),
}
