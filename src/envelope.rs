// src/envelope.rs
//! Hex envelope framing shared by the AEAD and legacy engines
//!
//! An envelope is `hex(random prefix) || hex(body)` — lowercase, no
//! separators. The prefix is the nonce (AEAD) or IV (legacy); the body is
//! ciphertext, with the tag appended in the AEAD case.

use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Encode prefix and body into a single envelope string
pub(crate) fn seal(prefix: &[u8], body: &[u8]) -> String {
    let mut out = String::with_capacity((prefix.len() + body.len()) * 2);
    out.push_str(&hex::encode(prefix));
    out.push_str(&hex::encode(body));
    out
}

/// Split an envelope back into (prefix, body) byte buffers
///
/// `prefix_len` is in bytes; the envelope must carry at least twice that many
/// hex characters. Anything malformed — short input, odd length, non-hex —
/// maps to `CryptoError::Encoding`.
pub(crate) fn open(envelope: &str, prefix_len: usize) -> Result<(Vec<u8>, Vec<u8>)> {
    let raw = envelope.as_bytes();
    let prefix_hex = prefix_len * 2;
    if raw.len() < prefix_hex {
        return Err(CryptoError::Encoding(format!(
            "envelope is {} characters, need at least {prefix_hex} for the random prefix",
            raw.len()
        )));
    }
    let prefix = hex::decode(&raw[..prefix_hex])
        .map_err(|e| CryptoError::Encoding(format!("invalid hex in envelope prefix: {e}")))?;
    let body = hex::decode(&raw[prefix_hex..])
        .map_err(|e| CryptoError::Encoding(format!("invalid hex in envelope body: {e}")))?;
    Ok((prefix, body))
}
