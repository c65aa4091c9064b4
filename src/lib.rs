//! # commander-life
//!
//! Life-tracking engine for multiplayer commander games played across a
//! league.
//!
//! ## Design Principles
//!
//! 1. **Append-Only History**: Every command clones the latest snapshot,
//!    applies one change and appends. Earlier snapshots are never touched;
//!    undo is truncation.
//!
//! 2. **Derived Elimination**: `is_eliminated` is recomputed for every
//!    player after every command, never set directly.
//!
//! 3. **Cosmetics Stay Out**: Seating order, colors and the transient
//!    "+N" indicator live beside the history, not in it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Snapshots and the history use `im-rs`,
//!   so each step shares structure with the previous one.
//!
//! - **Pure Projections**: Winner detection and the change log are computed
//!   from the history on demand.
//!
//! ## Modules
//!
//! - `core`: Players, roster, configuration, per-player state, deltas
//! - `session`: The session engine, history, table layout, winner reporting
//! - `summary`: Merged, newest-first change log over the history
//! - `feedback`: Cancel-and-replace timers for life-change indicators
//! - `dice`: Table dice roller

pub mod error;
pub mod core;
pub mod session;
pub mod summary;
pub mod feedback;
pub mod dice;

// Re-export commonly used types
pub use crate::error::{LifeError, Result};

pub use crate::core::{
    Player, PlayerId, Roster,
    SessionConfig, COMMANDER_DAMAGE_LIMIT, DEFAULT_STARTING_LIFE, POISON_LIMIT,
    PlayerState, Snapshot, EliminationCause,
    Delta, Field, AppliedDelta, Direction,
};

pub use crate::session::{
    LifeSession, History, MatchReporter,
    PlayerColor, PlayerTheme, Seating,
};

pub use crate::summary::{Change, ChangeGroup, FinalValue, summarize};

pub use crate::feedback::{FeedbackHandle, FeedbackTimers, LifeIndicator};

pub use crate::dice::{DiceRng, DiceRoll, DiceRoller, Die};
