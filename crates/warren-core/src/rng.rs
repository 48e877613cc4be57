//! Random number generation for dungeon layout.
//!
//! Uses a seeded ChaCha RNG so a given seed reproduces an identical
//! dungeon across runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generation random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation. The seed is
/// kept so callers can report or re-use it.
#[derive(Debug, Clone)]
pub struct GenRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GenRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `0..n`.
    ///
    /// Returns 0 if n is 0.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw in `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty. The partitioner leans on this
    /// clamp: a cut drawn from `[min, dim - min)` with `dim == 2 * min`
    /// must land on `min`, not fail.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len() as u32) as usize])
        }
    }
}

impl Default for GenRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
