//! Deterministic pseudo-random stream shared by placement and door resolution.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::{Deserialize, Serialize};

const MULBERRY32_INCREMENT: u32 = 0x6D2B_79F5;
const U32_SPAN: f64 = 4_294_967_296.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceAlgorithm {
    #[default]
    ChaCha8,
    /// 32-bit generator used by the historical map tooling. Only the low 32 bits of
    /// the seed are significant, so negative seeds wrap as two's complement.
    Mulberry32,
}

enum Stream {
    ChaCha8(Box<ChaCha8Rng>),
    Mulberry32 { state: u32 },
}

/// One seeded cursor. Every draw advances the same internal state, so callers
/// must keep the order of `next_*` calls fixed to reproduce a layout.
pub struct SeededSequence {
    stream: Stream,
}

impl SeededSequence {
    pub fn new(seed: i64) -> Self {
        Self::with_algorithm(seed, SequenceAlgorithm::ChaCha8)
    }

    pub fn with_algorithm(seed: i64, algorithm: SequenceAlgorithm) -> Self {
        let stream = match algorithm {
            SequenceAlgorithm::ChaCha8 => {
                Stream::ChaCha8(Box::new(ChaCha8Rng::seed_from_u64(seed as u64)))
            }
            SequenceAlgorithm::Mulberry32 => Stream::Mulberry32 { state: seed as u32 },
        };
        Self { stream }
    }

    pub fn next_u32(&mut self) -> u32 {
        match &mut self.stream {
            Stream::ChaCha8(rng) => rng.next_u32(),
            Stream::Mulberry32 { state } => {
                *state = state.wrapping_add(MULBERRY32_INCREMENT);
                let mut t = *state;
                t = (t ^ (t >> 15)).wrapping_mul(t | 1);
                t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
                t ^ (t >> 14)
            }
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_SPAN
    }

    /// Uniform integer in `[min_value, max_value]`, inclusive on both ends.
    pub fn next_int(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        let range_size = (max_value - min_value + 1) as f64;
        let offset = (self.next_float() * range_size) as usize;
        min_value + offset.min(max_value - min_value)
    }
}
