// tests/common.rs
//! Shared test utilities — deterministic RNG for pinning envelope prefixes

use rand_core::{impls, CryptoRng, Error, RngCore};

/// RNG that replays a fixed byte pattern.
///
/// Only for tests that need reproducible nonces/IVs; marked `CryptoRng` so it
/// satisfies the engines' bounds, which is obviously a lie outside of tests.
#[allow(dead_code)] // not every test crate uses it
pub struct FixedRng {
    pattern: Vec<u8>,
    pos: usize,
}

#[allow(dead_code)]
impl FixedRng {
    pub fn new(pattern: &[u8]) -> Self {
        assert!(!pattern.is_empty());
        Self {
            pattern: pattern.to_vec(),
            pos: 0,
        }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.pos % self.pattern.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}
