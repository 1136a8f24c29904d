// src/legacy.rs
//! Legacy streaming cipher — AES-CFB, unauthenticated
//!
//! Same envelope shape as the AEAD engine (`hex(iv) || hex(ciphertext)`, first
//! 32 hex characters decode to the 16-byte IV) but with a weaker contract:
//! there is no authentication tag, so a corrupted envelope decrypts to
//! corrupted plaintext without any error. Kept as a separate engine for
//! throughput comparison against the AEAD mode; do not use it for new data.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;

use crate::consts::{AES_KEY_LENGTHS, CFB_IV_LEN};
use crate::envelope;
use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Encrypt `plaintext` under `key` with AES-CFB, returning a hex envelope
///
/// A fresh 16-byte IV is drawn from the CSPRNG per call. No integrity
/// protection is applied.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<String> {
    encrypt_with(&mut OsRng, plaintext, key)
}

/// Same as [`encrypt`], drawing the IV from a caller-supplied CSPRNG
pub fn encrypt_with<R: CryptoRngCore>(rng: &mut R, plaintext: &[u8], key: &[u8]) -> Result<String> {
    if !AES_KEY_LENGTHS.contains(&key.len()) {
        return Err(CryptoError::KeySize { len: key.len() });
    }

    let mut iv = [0u8; CFB_IV_LEN];
    rng.try_fill_bytes(&mut iv)?;

    let mut buf = plaintext.to_vec();
    match key.len() {
        16 => Encryptor::<Aes128>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .encrypt(&mut buf),
        24 => Encryptor::<Aes192>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .encrypt(&mut buf),
        _ => Encryptor::<Aes256>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .encrypt(&mut buf),
    }

    Ok(envelope::seal(&iv, &buf))
}

/// Invert [`encrypt`]. Tampering is NOT detected: a corrupted envelope that
/// still parses as hex yields corrupted plaintext, not an error.
pub fn decrypt(envelope_str: &str, key: &[u8]) -> Result<Vec<u8>> {
    if !AES_KEY_LENGTHS.contains(&key.len()) {
        return Err(CryptoError::KeySize { len: key.len() });
    }

    let (iv, mut buf) = envelope::open(envelope_str, CFB_IV_LEN)?;

    match key.len() {
        16 => Decryptor::<Aes128>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .decrypt(&mut buf),
        24 => Decryptor::<Aes192>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .decrypt(&mut buf),
        _ => Decryptor::<Aes256>::new_from_slices(key, &iv)
            .map_err(|_| CryptoError::KeySize { len: key.len() })?
            .decrypt(&mut buf),
    }

    Ok(buf)
}
