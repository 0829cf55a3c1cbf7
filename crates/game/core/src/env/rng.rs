//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system that ensures deterministic
//! random number generation for shuffles, enemy HP rolls, attack variance,
//! random targeting and terrain effects.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. A session built
//! from the same seed and driven with the same inputs replays identically.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let offset = u64::from(self.next_u32(seed)) % span;
        min + u32::try_from(offset).unwrap_or(max - min)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. Each call is a pure function of its seed; sequencing is
/// provided by [`CombatRng`].
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Independent streams of randomness within one encounter.
///
/// Mixing the stream into the seed keeps, for example, a change in how many
/// shuffles happen from shifting every enemy damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RngStream {
    Shuffle = 1,
    EnemyHp = 2,
    Intent = 3,
    Targeting = 4,
    CostReroll = 5,
    Lightning = 6,
}

/// Compute deterministic seed from combat state components.
///
/// * `combat_seed` - Base seed set at encounter start
/// * `nonce` - Sequence number, incremented for every roll
/// * `stream` - Which consumer is rolling
/// * `context` - Additional context for multiple rolls in the same step
pub fn compute_seed(combat_seed: u64, nonce: u64, stream: u32, context: u32) -> u64 {
    // SplitMix64 and FxHash multipliers
    let mut hash = combat_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful random source owned by a combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRng {
    seed: u64,
    nonce: u64,
}

impl CombatRng {
    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rolls made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, stream: RngStream) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, stream as u32, 0);
        self.nonce = self.nonce.wrapping_add(1);
        seed
    }

    /// Uniform value in `[min, max]`. Returns `min` when the range is empty.
    pub fn range_inclusive(&mut self, stream: RngStream, min: u32, max: u32) -> u32 {
        let seed = self.next_seed(stream);
        PcgRng.range(seed, min, max)
    }

    /// Uniform value in `[0, n)`. Returns 0 when `n` is 0.
    pub fn below(&mut self, stream: RngStream, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.range_inclusive(stream, 0, n - 1)
    }

    /// Random index into a collection of `len` elements.
    pub fn pick_index(&mut self, stream: RngStream, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Some(self.below(stream, len) as usize)
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, stream: RngStream, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range_inclusive(stream, 0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}
