//! Random source for round generation.
//!
//! Pairing is random by design, but the pairing algorithm has to be
//! testable, so shuffling goes through an injectable wrapper instead of a
//! thread-local RNG. Production callers use [`ShuffleRng::from_entropy`];
//! tests pin a seed and get the same permutation every run.
//!
//! ```
//! use knockout::core::ShuffleRng;
//!
//! let mut a = ShuffleRng::new(42);
//! let mut b = ShuffleRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable random source backing the shuffle step of round generation.
///
/// ChaCha8 keeps the sequence deterministic per seed across platforms.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ShuffleRng {
    /// Create an RNG with a fixed seed. Same seed, same permutations.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    ///
    /// Each call draws fresh randomness; permutations are not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produce a uniformly random permutation of `slice`, in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
