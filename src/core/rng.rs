//! Seedable shuffling for term tiles.
//!
//! Term order is the only random thing in a round. A fixed seed gives a
//! reproducible board, and [`GameRngState`] lets a front end record the
//! stream position and resume it later.
//!
//! ## Usage
//!
//! ```
//! use rust_matchgame::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let order = rng.shuffled(vec!["a", "b", "c", "d"]);
//!
//! // Same seed, same order
//! let mut again = GameRng::new(42);
//! assert_eq!(again.shuffled(vec!["a", "b", "c", "d"]), order);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// RNG behind the term-order shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=max`.
    pub fn index_up_to(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place.
    ///
    /// Fisher–Yates: walk from the last index down to 1 and swap each slot
    /// with a uniformly chosen slot in `[0, i]`. Slices of length 0 or 1
    /// are left untouched.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_up_to(i);
            slice.swap(i, j);
        }
    }

    /// Shuffle an owned sequence and return it.
    #[must_use]
    pub fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        self.shuffle(&mut items);
        items
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable position of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
