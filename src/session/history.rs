//! Append-only snapshot history with point-in-time revert.
//!
//! `history[0]` is always the initial snapshot and the last entry is the
//! authoritative current state. The only way to shrink the history is
//! [`History::truncate_to`].

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Snapshot;
use crate::error::{LifeError, Result};

/// Ordered sequence of snapshots. Never empty.
///
/// Deserialization goes through [`HistoryRepr`] so an empty history is
/// rejected instead of loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct History {
    snapshots: Vector<Snapshot>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRepr {
    snapshots: Vector<Snapshot>,
}

impl TryFrom<HistoryRepr> for History {
    type Error = LifeError;

    fn try_from(repr: HistoryRepr) -> Result<Self> {
        if repr.snapshots.is_empty() {
            return Err(LifeError::EmptyHistory);
        }
        Ok(Self {
            snapshots: repr.snapshots,
        })
    }
}

impl History {
    /// Start a history from its initial snapshot.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: Vector::unit(initial),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The current (latest) snapshot.
    #[must_use]
    pub fn latest(&self) -> &Snapshot {
        self.snapshots
            .last()
            .unwrap_or_else(|| unreachable!("history always holds its initial snapshot"))
    }

    /// The initial snapshot.
    #[must_use]
    pub fn initial(&self) -> &Snapshot {
        self.snapshots
            .front()
            .unwrap_or_else(|| unreachable!("history always holds its initial snapshot"))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Append a new current snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
    }

    /// Keep `history[0..=index]`.
    ///
    /// `index == len - 1` is a no-op and returns `Ok(false)`; anything past
    /// the end is rejected without touching the history.
    pub fn truncate_to(&mut self, index: usize) -> Result<bool> {
        let len = self.len();
        if index >= len {
            return Err(LifeError::RevertOutOfRange { index, len });
        }
        if index == len - 1 {
            return Ok(false);
        }
        self.snapshots.truncate(index + 1);
        Ok(true)
    }
}
