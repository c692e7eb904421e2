//! Deterministic random number generation.
//!
//! Randomness enters the engine in exactly two places: the deck shuffle at
//! game construction and the AI selector's tie-break coin flip. Both take a
//! `GameRng` explicitly; nothing reads global random state, and nothing
//! reseeds mid-match.
//!
//! ## Forking
//!
//! A match driver seeds one `GameRng` and hands `fork()`ed streams to each
//! AI selector, so every consumer draws from an independent deterministic
//! sequence:
//!
//! ```
//! use cardclimb::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut ai_rng = rng.fork();
//!
//! // Same seed, same fork order: identical sequences.
//! let mut rng2 = GameRng::new(42);
//! let mut ai_rng2 = rng2.fork();
//! assert_eq!(ai_rng.coin_flip(), ai_rng2.coin_flip());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent consumer streams.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random index in the given range.
    pub fn gen_index(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Flip a fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}
