// src/consts.rs
//! Shared constants — cipher geometry and security parameters

/// AES-GCM nonce length in bytes (96-bit, the recommended GCM geometry)
pub const GCM_NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const GCM_TAG_LEN: usize = 16;

/// Hex characters occupied by the nonce prefix of an AEAD envelope
pub const GCM_NONCE_HEX_LEN: usize = GCM_NONCE_LEN * 2;

/// Maximum AES-GCM message length in bytes (2^39 − 256 bits)
pub const GCM_MAX_PLAINTEXT_LEN: usize = (1 << 36) - 32;

/// AES-CFB initialization vector length in bytes (one AES block)
pub const CFB_IV_LEN: usize = 16;

/// Hex characters occupied by the IV prefix of a legacy envelope
pub const CFB_IV_HEX_LEN: usize = CFB_IV_LEN * 2;

/// Supported AES key lengths: AES-128, AES-192, AES-256
pub const AES_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// SHA-256 digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// Default RSA modulus size in bits
pub const DEFAULT_RSA_BITS: usize = 2048;
