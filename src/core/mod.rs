//! Core types: players, roster, configuration, per-player state, deltas.
//!
//! These are the building blocks the session engine and the history
//! summarizer operate on. None of them perform I/O.

pub mod player;
pub mod config;
pub mod state;
pub mod delta;

pub use player::{Player, PlayerId, Roster};
pub use config::{
    SessionConfig, COMMANDER_DAMAGE_LIMIT, DEFAULT_FEEDBACK_WINDOW_MS, DEFAULT_STARTING_LIFE,
    POISON_LIMIT,
};
pub use state::{EliminationCause, PlayerState, Snapshot};
pub use delta::{AppliedDelta, Delta, Direction, Field};
