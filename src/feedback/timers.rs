//! Per-player cancel-and-replace decay timers.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::core::{AppliedDelta, Direction, PlayerId, SessionConfig};

/// A visible life-change indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeIndicator {
    pub direction: Direction,
    /// Signed life change of the most recent delta.
    pub amount: i64,
    /// When the indicator clears on its own.
    pub deadline: Instant,
    generation: u64,
}

/// Identifies one scheduled clear. Only the newest handle per player is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedbackHandle {
    pub player: PlayerId,
    generation: u64,
}

/// Pending indicators keyed by player.
#[derive(Clone, Debug)]
pub struct FeedbackTimers {
    window: Duration,
    pending: FxHashMap<PlayerId, LifeIndicator>,
    next_generation: u64,
}

impl FeedbackTimers {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: FxHashMap::default(),
            next_generation: 0,
        }
    }

    /// Timers using the session's configured decay window.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.feedback_window())
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Show the indicator for an applied delta, replacing any pending one
    /// for the same player.
    ///
    /// Returns `None` (and leaves existing indicators alone) when life did
    /// not move.
    pub fn record(&mut self, applied: AppliedDelta, now: Instant) -> Option<FeedbackHandle> {
        let direction = applied.direction()?;
        let generation = self.next_generation;
        self.next_generation += 1;

        let replaced = self.pending.insert(
            applied.player,
            LifeIndicator {
                direction,
                amount: applied.life_delta,
                deadline: now + self.window,
                generation,
            },
        );
        if replaced.is_some() {
            tracing::trace!(player = %applied.player, "replaced pending life indicator");
        }

        Some(FeedbackHandle {
            player: applied.player,
            generation,
        })
    }

    /// Clear the indicator a handle refers to, if it is still the current
    /// one. Returns whether anything was cleared.
    pub fn clear(&mut self, handle: FeedbackHandle) -> bool {
        match self.pending.get(&handle.player) {
            Some(indicator) if indicator.generation == handle.generation => {
                self.pending.remove(&handle.player);
                true
            }
            _ => false,
        }
    }

    /// Drop every indicator whose deadline has passed. Returns how many.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, indicator| indicator.deadline > now);
        before - self.pending.len()
    }

    /// The live indicator for a player at `now`.
    #[must_use]
    pub fn indicator(&self, player: PlayerId, now: Instant) -> Option<&LifeIndicator> {
        self.pending
            .get(&player)
            .filter(|indicator| indicator.deadline > now)
    }

    /// Earliest pending deadline, for scheduling the next `expire`.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|indicator| indicator.deadline).min()
    }

    pub fn clear_all(&mut self) {
        self.pending.clear();
    }
}

impl Default for FeedbackTimers {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
