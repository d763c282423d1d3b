//! Random number generation for level generation
//!
//! Uses a seeded ChaCha RNG so that any level can be rebuilt from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Level generation random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was built from, so callers
/// that asked for an entropy seed can still report and replay it.
#[derive(Debug, Clone)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl LevelRng {
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

    /// Use `seed` when given, otherwise draw one from entropy
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Unweighted coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.rn2(2) == 1
    }

    /// Pick an index into `weights` with probability proportional to its weight.
    ///
    /// Returns `None` when the weights sum to zero.
    pub fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.rn2(total);
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return Some(i);
            }
            roll -= w;
        }
        None
    }
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
