// tests/key_tests.rs
use envelope_kit::{generate_symmetric_key, key_representations};

mod common;
use common::FixedRng;

#[test]
fn test_generated_keys_have_requested_size_and_are_random() {
    for size in [16, 24, 32] {
        let key1 = generate_symmetric_key(size).unwrap();
        let key2 = generate_symmetric_key(size).unwrap();
        assert_eq!(key1.len(), size);
        assert_ne!(key1.as_slice(), key2.as_slice());
    }
}

#[test]
fn test_injected_rng_produces_expected_bytes() {
    let mut rng = FixedRng::new(&[0x11, 0x22]);
    let key = envelope_kit::key_ops::generate_symmetric_key_with(&mut rng, 4).unwrap();
    assert_eq!(key.as_slice(), &[0x11, 0x22, 0x11, 0x22]);
}

#[test]
fn test_key_representations_agree() {
    let key = generate_symmetric_key(32).unwrap();
    let repr = key_representations(&key);

    assert_eq!(repr.hex.len(), 64);
    assert_eq!(hex::decode(&repr.hex).unwrap(), key.as_slice());
    assert!(!repr.base64url_no_pad.contains('='));

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    assert_eq!(STANDARD.decode(&repr.base64).unwrap(), key.as_slice());
}
