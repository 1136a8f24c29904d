// src/aead.rs
//! Authenticated symmetric encryption — AES-GCM over hex envelopes
//!
//! The envelope is `hex(nonce) || hex(ciphertext || tag)`: the first 24 hex
//! characters always decode to the 12-byte nonce, the remainder to the
//! ciphertext with the 16-byte tag appended. A fresh nonce is drawn from the
//! CSPRNG on every call; callers never supply one.

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::AesGcm;
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use tracing::trace;

use crate::consts::{AES_KEY_LENGTHS, GCM_MAX_PLAINTEXT_LEN, GCM_NONCE_LEN};
use crate::envelope;
use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

type Aes128Gcm = AesGcm<Aes128, U12>;
type Aes192Gcm = AesGcm<Aes192, U12>;
type Aes256Gcm = AesGcm<Aes256, U12>;

/// Encrypt `plaintext` under `key`, returning a hex AEAD envelope
///
/// The key selects the cipher: 16 bytes → AES-128-GCM, 24 → AES-192-GCM,
/// 32 → AES-256-GCM. Empty plaintext is valid and still produces a tag.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<String> {
    encrypt_with(&mut OsRng, plaintext, key)
}

/// Same as [`encrypt`], drawing the nonce from a caller-supplied CSPRNG
pub fn encrypt_with<R: CryptoRngCore>(rng: &mut R, plaintext: &[u8], key: &[u8]) -> Result<String> {
    if !AES_KEY_LENGTHS.contains(&key.len()) {
        return Err(CryptoError::KeySize { len: key.len() });
    }

    let mut nonce = [0u8; GCM_NONCE_LEN];
    rng.try_fill_bytes(&mut nonce)?;

    let sealed = match key.len() {
        16 => gcm_seal::<Aes128Gcm>(key, &nonce, plaintext),
        24 => gcm_seal::<Aes192Gcm>(key, &nonce, plaintext),
        _ => gcm_seal::<Aes256Gcm>(key, &nonce, plaintext),
    }?;

    trace!(
        plaintext_len = plaintext.len(),
        sealed_len = sealed.len(),
        "sealed AEAD envelope"
    );
    Ok(envelope::seal(&nonce, &sealed))
}

/// Open a hex AEAD envelope produced by [`encrypt`] under the same key
///
/// Any single-bit change to the nonce, ciphertext, or tag portion fails with
/// `CryptoError::Authentication`.
pub fn decrypt(envelope_str: &str, key: &[u8]) -> Result<Vec<u8>> {
    if !AES_KEY_LENGTHS.contains(&key.len()) {
        return Err(CryptoError::KeySize { len: key.len() });
    }

    let (nonce, body) = envelope::open(envelope_str, GCM_NONCE_LEN)?;

    match key.len() {
        16 => gcm_open::<Aes128Gcm>(key, &nonce, &body),
        24 => gcm_open::<Aes192Gcm>(key, &nonce, &body),
        _ => gcm_open::<Aes256Gcm>(key, &nonce, &body),
    }
}

fn gcm_seal<C>(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::KeySize { len: key.len() })?;
    // GCM sealing fails only when the message exceeds the mode's length bound
    cipher
        .encrypt(Nonce::<C>::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::PlaintextTooLarge {
            len: plaintext.len(),
            max: GCM_MAX_PLAINTEXT_LEN,
        })
}

fn gcm_open<C>(key: &[u8], nonce: &[u8], body: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::KeySize { len: key.len() })?;
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), body)
        .map_err(|_| CryptoError::Authentication)
}
