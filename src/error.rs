//! Error types for the life-counter core.
//!
//! Every variant is an invariant violation: the caller asked for something
//! the current session cannot represent. Commands validate before mutating,
//! so an `Err` never leaves a partially applied change behind.

use crate::core::PlayerId;

/// Errors returned by session, roster and dice operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// A session needs at least two players to have a winner.
    #[error("a game needs at least 2 players, got {count}")]
    NotEnoughPlayers {
        /// Number of players supplied.
        count: usize,
    },

    /// Two roster entries share the same id.
    #[error("duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    /// The player is not part of this game.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// The attacking player is not an opponent of the defender.
    #[error("{attacker} is not an opponent of {defender}")]
    UnknownOpponent {
        /// Player receiving the commander damage.
        defender: PlayerId,
        /// Player named as the source.
        attacker: PlayerId,
    },

    /// A player cannot deal commander damage to themself.
    #[error("{0} cannot take commander damage from themself")]
    SelfCommanderDamage(PlayerId),

    /// A commander-damage delta was requested without naming the attacker.
    #[error("commander damage against {0} needs an attacking opponent")]
    MissingOpponent(PlayerId),

    /// Revert target does not reference a snapshot in the history.
    #[error("cannot revert to index {index}: history has {len} snapshots")]
    RevertOutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Applying the delta would push a counter past the range of `i64`.
    #[error("counter overflow for {player}")]
    CounterOverflow {
        /// Player whose counter would overflow.
        player: PlayerId,
    },

    /// A history was loaded without its initial snapshot.
    #[error("history must hold at least the initial snapshot")]
    EmptyHistory,

    /// A seating order is not a permutation of the roster.
    #[error("seating order must list every player exactly once")]
    InvalidSeating,

    /// A winner was confirmed while more or fewer than one player survives.
    #[error("no provisional winner to confirm")]
    NoProvisionalWinner,

    /// Dice count outside the supported range.
    #[error("can roll between 1 and 10 dice, got {count}")]
    InvalidDiceCount {
        /// Requested number of dice.
        count: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
