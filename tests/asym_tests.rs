// tests/asym_tests.rs
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use envelope_kit::error::CryptoError;
use envelope_kit::{asym, generate_key_pair, KeyPair};
use rsa::traits::PublicKeyParts;

// 2048-bit prime search is the slow part of this suite; generate each pair
// once and share it across tests
fn alice() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair().unwrap())
}

fn mallory() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair().unwrap())
}

#[test]
fn test_key_pair_has_2048_bit_modulus() {
    assert_eq!(alice().public().size(), 256);
}

#[test]
fn test_hello_world_roundtrip() {
    let ciphertext = asym::encrypt(alice().public(), b"Hello, world!").unwrap();

    // raw ciphertext is always exactly the modulus length
    assert_eq!(ciphertext.len(), 256);

    let decrypted = asym::decrypt(alice().private(), &ciphertext).unwrap();
    assert_eq!(decrypted, b"Hello, world!");
}

#[test]
fn test_wrong_private_key_is_an_opaque_failure() {
    let ciphertext = asym::encrypt(alice().public(), b"Hello, world!").unwrap();
    let result = asym::decrypt(mallory().private(), &ciphertext);
    assert!(matches!(result, Err(CryptoError::Decryption)));
}

#[test]
fn test_tampered_ciphertext_is_an_opaque_failure() {
    let mut ciphertext = asym::encrypt(alice().public(), b"sealed").unwrap();
    ciphertext[128] ^= 0x01;
    assert!(matches!(
        asym::decrypt(alice().private(), &ciphertext),
        Err(CryptoError::Decryption)
    ));
}

#[test]
fn test_oaep_capacity_boundary() {
    assert_eq!(asym::oaep_capacity(256), 190);

    // exactly at capacity: accepted
    let at_limit = vec![0x42u8; 190];
    let ciphertext = asym::encrypt(alice().public(), &at_limit).unwrap();
    assert_eq!(
        asym::decrypt(alice().private(), &ciphertext).unwrap(),
        at_limit
    );

    // one byte over: rejected before any RSA math runs
    let over = vec![0x42u8; 191];
    assert!(matches!(
        asym::encrypt(alice().public(), &over),
        Err(CryptoError::PlaintextTooLarge { len: 191, max: 190 })
    ));
}

#[test]
fn test_encryption_is_randomized() {
    let first = asym::encrypt(alice().public(), b"same input").unwrap();
    let second = asym::encrypt(alice().public(), b"same input").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_base64_transport_is_the_callers_job() {
    // the toolkit hands back raw bytes; a caller shipping them over text
    // transports encodes/decodes around the library
    let ciphertext = asym::encrypt(alice().public(), b"over the wire").unwrap();
    let wire = STANDARD.encode(&ciphertext);
    let received = STANDARD.decode(wire).unwrap();
    assert_eq!(
        asym::decrypt(alice().private(), &received).unwrap(),
        b"over the wire"
    );
}
