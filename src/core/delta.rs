//! Deltas: the commands that move a game forward one step.
//!
//! A delta names a counter (life, poison, or commander damage from one
//! opponent), the player it applies to, and a signed amount. Applying a
//! delta yields an [`AppliedDelta`] describing the resulting life change,
//! which drives the transient "+N" indicator in the UI.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::{LifeError, Result};

/// The counter a delta targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Life,
    Poison,
    CommanderDamage,
}

/// A single validated-on-apply change to one player's counters.
///
/// ## Example
///
/// ```
/// use commander_life::core::{Delta, Field, PlayerId};
///
/// let hit = Delta::from_field(PlayerId::new(1), Field::CommanderDamage, 3, Some(PlayerId::new(2)))
///     .unwrap();
/// assert_eq!(hit, Delta::CommanderDamage {
///     defender: PlayerId::new(1),
///     attacker: PlayerId::new(2),
///     amount: 3,
/// });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delta {
    /// Gain or lose life. Unbounded in both directions.
    Life { player: PlayerId, amount: i64 },
    /// Add or remove poison counters. Clamped at zero.
    Poison { player: PlayerId, amount: i64 },
    /// Add or remove commander damage dealt by `attacker` to `defender`.
    /// Clamped at zero; the defender's life moves by the clamped change.
    CommanderDamage {
        defender: PlayerId,
        attacker: PlayerId,
        amount: i64,
    },
}

impl Delta {
    /// Build a delta from the field-oriented form used by UI callers.
    ///
    /// `opponent` is required for `Field::CommanderDamage` and ignored
    /// otherwise.
    pub fn from_field(
        player: PlayerId,
        field: Field,
        amount: i64,
        opponent: Option<PlayerId>,
    ) -> Result<Self> {
        match field {
            Field::Life => Ok(Delta::Life { player, amount }),
            Field::Poison => Ok(Delta::Poison { player, amount }),
            Field::CommanderDamage => {
                let attacker = opponent.ok_or(LifeError::MissingOpponent(player))?;
                Ok(Delta::CommanderDamage {
                    defender: player,
                    attacker,
                    amount,
                })
            }
        }
    }

    /// The player whose state this delta changes.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Delta::Life { player, .. } | Delta::Poison { player, .. } => player,
            Delta::CommanderDamage { defender, .. } => defender,
        }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Delta::Life { .. } => Field::Life,
            Delta::Poison { .. } => Field::Poison,
            Delta::CommanderDamage { .. } => Field::CommanderDamage,
        }
    }

    #[must_use]
    pub fn amount(&self) -> i64 {
        match *self {
            Delta::Life { amount, .. }
            | Delta::Poison { amount, .. }
            | Delta::CommanderDamage { amount, .. } => amount,
        }
    }
}

/// Direction of a life change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Outcome of applying a delta: how the target player's life moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDelta {
    /// Player whose life total changed (the defender for commander damage).
    pub player: PlayerId,
    /// Signed change to that player's life total.
    pub life_delta: i64,
}

impl AppliedDelta {
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.life_delta {
            0 => None,
            d if d > 0 => Some(Direction::Increase),
            _ => Some(Direction::Decrease),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field() {
        let p = PlayerId::new(1);

        assert_eq!(
            Delta::from_field(p, Field::Life, -2, None).unwrap(),
            Delta::Life { player: p, amount: -2 }
        );
        assert_eq!(
            Delta::from_field(p, Field::Poison, 1, Some(PlayerId::new(2))).unwrap(),
            Delta::Poison { player: p, amount: 1 }
        );
        assert_eq!(
            Delta::from_field(p, Field::CommanderDamage, 1, None),
            Err(LifeError::MissingOpponent(p))
        );
    }

    #[test]
    fn test_accessors() {
        let delta = Delta::CommanderDamage {
            defender: PlayerId::new(3),
            attacker: PlayerId::new(4),
            amount: 7,
        };
        assert_eq!(delta.player(), PlayerId::new(3));
        assert_eq!(delta.field(), Field::CommanderDamage);
        assert_eq!(delta.amount(), 7);
    }

    #[test]
    fn test_applied_direction() {
        let p = PlayerId::new(1);
        assert_eq!(AppliedDelta { player: p, life_delta: 3 }.direction(), Some(Direction::Increase));
        assert_eq!(AppliedDelta { player: p, life_delta: -1 }.direction(), Some(Direction::Decrease));
        assert_eq!(AppliedDelta { player: p, life_delta: 0 }.direction(), None);
    }
}
