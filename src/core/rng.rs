//! Deterministic random number generation for symbol draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! The draw source is injected into the engine at construction, so tests
//! can seed it and replay exact games.
//!
//! ```
//! use emoji_ttt::core::DrawRng;
//!
//! let mut a = DrawRng::new(42);
//! let mut b = DrawRng::new(42);
//!
//! let pool = ["🐶", "🐱", "🐭"];
//! assert_eq!(a.choose(&pool), b.choose(&pool));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic draw source for the engine.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new draw source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable draw-source state.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
