//! Deterministic, restorable RNG for table dice.
//!
//! ```
//! use commander_life::dice::DiceRng;
//!
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.roll_die(20), b.roll_die(20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded ChaCha8 stream used for dice rolls.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one die with `sides` faces, returning 1..=sides.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`state`](Self::state).
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
