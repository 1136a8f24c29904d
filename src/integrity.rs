// src/integrity.rs
//! Content checksums and keyed authentication tags
//!
//! Stateless, deterministic primitives: SHA-256 checksums and HMAC-SHA256
//! tags, both rendered as 64 lowercase hex characters.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 checksum of `data`, hex-encoded
pub fn checksum(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// HMAC-SHA256 tag over `data` using `key`, hex-encoded
///
/// HMAC accepts keys of any length.
pub fn mac(key: &[u8], data: &[u8]) -> String {
    hex::encode(hmac_sha256(key, data))
}

/// Check a hex-encoded tag against a fresh HMAC of `data` under `key`
///
/// The content comparison runs in constant time. Tag length is not secret:
/// a tag of the wrong length (or one that is not valid hex) is rejected
/// immediately.
pub fn verify_mac(key: &[u8], data: &[u8], tag: &str) -> bool {
    let presented = match hex::decode(tag) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let expected = hmac_sha256(key, data);
    if presented.len() != expected.len() {
        return false;
    }
    expected.as_slice().ct_eq(presented.as_slice()).into()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}
