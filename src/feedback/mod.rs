//! Transient life-change feedback (the "+N" flash next to a life total).
//!
//! Owned by the presentation layer, not the session: indicators are never
//! part of the history. Each player has at most one pending indicator.
//!
//! ## Contract
//!
//! A new life change for player P cancels P's pending indicator and starts
//! a fresh decay window. A stale [`FeedbackHandle`] (one issued before the
//! replacement) can no longer clear P's indicator.
//!
//! Time is passed in by the caller so hosts can drive it from their own
//! event loop and tests can use synthetic instants.

pub mod timers;

pub use timers::{FeedbackHandle, FeedbackTimers, LifeIndicator};
