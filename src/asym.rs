// src/asym.rs
//! Asymmetric encryption — RSA-OAEP with SHA-256
//!
//! Output is the raw ciphertext, always exactly the modulus length (256 bytes
//! for a 2048-bit key). Transport encoding (base64 etc.) is the caller's job.

use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::consts::DIGEST_LEN;
use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Largest plaintext OAEP/SHA-256 can carry for a modulus of `modulus_bytes`
///
/// 190 bytes for a 2048-bit key.
pub fn oaep_capacity(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(2 * DIGEST_LEN + 2)
}

/// Encrypt a small plaintext to `public_key`
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_with(&mut OsRng, public_key, plaintext)
}

/// Same as [`encrypt`], drawing OAEP randomness from a caller-supplied CSPRNG
pub fn encrypt_with<R: CryptoRngCore>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let max = oaep_capacity(public_key.size());
    if plaintext.len() > max {
        return Err(CryptoError::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    // past the capacity check, the only failure OAEP sealing reports is an
    // over-long message
    public_key
        .encrypt(rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|_| CryptoError::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        })
}

/// Decrypt a ciphertext produced by [`encrypt`] with the matching private key
///
/// Every unpadding or format failure maps to the same opaque
/// `CryptoError::Decryption` — callers (and attackers) cannot tell why a
/// ciphertext was rejected.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    private_key
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|_| CryptoError::Decryption)
}
