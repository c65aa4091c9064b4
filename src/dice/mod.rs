//! Table dice (d4 through d20), rolled outside the life-counter history.

pub mod rng;
pub mod roll;

pub use rng::{DiceRng, DiceRngState};
pub use roll::{DiceRoll, DiceRoller, Die, MAX_DICE};
