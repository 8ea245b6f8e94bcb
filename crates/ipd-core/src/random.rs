//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG handed to strategies for the duration of a match.
//! Uses xorshift64* and plugs into `rand` through `RngCore`, so
//! strategies draw ranges and unit floats via the `rand::Rng` extension.

use rand::{RngCore, SeedableRng};

/// Seeded random number generator
///
/// Deterministic: same seed + index = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and match index
    pub fn new(seed: &[u8; 32], match_index: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= u64::from(match_index).wrapping_mul(0x517cc1b727220a95);

        Self::warmed(state)
    }

    /// Independent stream for one seat of the match, so the two players
    /// never draw from the same generator
    pub fn for_player(&self, seat: u8) -> Self {
        let state = self.state ^ u64::from(seat).wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15);
        Self::warmed(state)
    }

    fn warmed(state: u64) -> Self {
        // xorshift is stuck at zero forever
        let state = if state == 0 { 0x2545f4914f6cdd1d } else { state };
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.step();
        }
        rng
    }

    // xorshift64*
    fn step(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed, 0)
    }
}
