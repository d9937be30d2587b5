//! Deterministic random number generation for board scrambles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Forkable**: Independent streams, e.g. one per generated test board
//!
//! ```
//! use slide_search::core::BoardRng;
//!
//! let moves = ['U', 'R', 'D', 'L'];
//! let mut a = BoardRng::new(7);
//! let mut b = BoardRng::new(7);
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by the scrambler.
///
/// Uses ChaCha8 so the same seed yields the same board on every platform.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
