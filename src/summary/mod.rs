//! Human-readable change log derived from the snapshot history.
//!
//! The summarizer is a read-side projection: it never mutates the history
//! and can be recomputed whenever the history changes.

pub mod change;
pub mod summarizer;

pub use change::{Change, ChangeGroup, FinalValue, StepChange};
pub use summarizer::{detect_change, summarize, summarize_snapshots};
