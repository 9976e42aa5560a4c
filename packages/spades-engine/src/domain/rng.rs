//! Deterministic, platform-independent PRNG keyed by a seed string.
//!
//! The seed is hashed (FNV-1a over UTF-16 code units) into a 32-bit state,
//! which then advances with a xorshift32 step. Same seed, same sequence.

/// Substituted when the seed hashes to zero; xorshift never leaves a zero state.
const ZERO_STATE_REPLACEMENT: u32 = 123_456_789;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Hash a seed string into 32 bits.
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Seeded xorshift32 generator. Each instance owns its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn from_seed(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    pub fn from_state(state: u32) -> Self {
        let state = if state == 0 {
            ZERO_STATE_REPLACEMENT
        } else {
            state
        };
        Self { state }
    }

    /// Advance and return the raw 32-bit state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next draw in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// `floor(draw * bound)`, always in `0..bound` for `bound > 0`.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}
