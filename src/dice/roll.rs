//! Rolling a handful of identical dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::DiceRng;
use crate::error::{LifeError, Result};

/// Most dice rolled at once.
pub const MAX_DICE: usize = 10;

/// Supported die shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Die {
    pub const ALL: [Die; 6] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12, Die::D20];

    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Outcome of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die: Die,
    pub results: SmallVec<[u32; MAX_DICE]>,
    pub total: u32,
}

/// Table dice roller. Independent of any session history.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    rng: DiceRng,
}

impl DiceRoller {
    #[must_use]
    pub fn new(rng: DiceRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(DiceRng::new(seed))
    }

    #[must_use]
    pub fn rng(&self) -> &DiceRng {
        &self.rng
    }

    /// Roll `count` dice of one shape. `count` must be in `1..=10`.
    pub fn roll(&mut self, count: usize, die: Die) -> Result<DiceRoll> {
        if !(1..=MAX_DICE).contains(&count) {
            return Err(LifeError::InvalidDiceCount { count });
        }

        let results: SmallVec<[u32; MAX_DICE]> =
            (0..count).map(|_| self.rng.roll_die(die.sides())).collect();
        let total: u32 = results.iter().sum();

        tracing::debug!(%die, count, total, "rolled dice");
        Ok(DiceRoll { die, results, total })
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new(DiceRng::from_entropy())
    }
}
