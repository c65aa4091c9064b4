//! Change log entries derived from consecutive snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};

/// What changed in one history step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Change {
    /// Life total moved (not as a side effect of commander damage).
    Life { player: PlayerId },
    /// Poison counters moved.
    Poison { player: PlayerId },
    /// Player was eliminated or revived.
    Elimination { player: PlayerId },
    /// Commander damage from `attacker` to `defender` moved.
    CommanderDamage {
        defender: PlayerId,
        attacker: PlayerId,
    },
    /// Immunity was toggled without flipping elimination.
    Immunity { player: PlayerId },
    /// The step left every tracked value as it was (e.g. poison -1 at 0).
    Unchanged,
}

impl Change {
    /// The player the change is attributed to (the defender for commander
    /// damage).
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            Change::Life { player }
            | Change::Poison { player }
            | Change::Elimination { player }
            | Change::Immunity { player } => Some(player),
            Change::CommanderDamage { defender, .. } => Some(defender),
            Change::Unchanged => None,
        }
    }

    #[must_use]
    pub fn attacker(&self) -> Option<PlayerId> {
        match *self {
            Change::CommanderDamage { attacker, .. } => Some(attacker),
            _ => None,
        }
    }

    /// Whether consecutive steps with this change collapse into one group.
    ///
    /// Elimination and immunity flips are discrete events and never merge.
    #[must_use]
    pub fn is_mergeable(&self) -> bool {
        !matches!(self, Change::Elimination { .. } | Change::Immunity { .. })
    }
}

/// Resulting value after a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalValue {
    /// Counter value: life total, poison count, or commander damage.
    Amount(i64),
    /// `true` = eliminated, `false` = revived.
    Eliminated(bool),
    /// `true` = became immune, `false` = immunity removed.
    Immune(bool),
    /// Nothing changed.
    None,
}

/// One attributed step between `history[index - 1]` and `history[index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepChange {
    pub change: Change,
    /// Signed change of the counter (0 for flips).
    pub delta: i64,
    pub value: FinalValue,
}

/// A merged run of consecutive same-kind steps, newest state last.
///
/// The run covers the transitions `start_index -> ... -> end_index`, so
/// reverting to `start_index` undoes every step in the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeGroup {
    pub change: Change,
    /// Signed sum of the merged step deltas.
    pub total_delta: i64,
    /// Number of merged steps.
    pub count: usize,
    /// Value after the newest step of the run.
    pub final_value: FinalValue,
    /// Snapshot index before the oldest step of the run.
    pub start_index: usize,
    /// Snapshot index after the newest step of the run.
    pub end_index: usize,
}

impl ChangeGroup {
    /// Group holding a single step that produced `history[index]`.
    #[must_use]
    pub fn from_step(step: StepChange, index: usize) -> Self {
        Self {
            change: step.change,
            total_delta: step.delta,
            count: 1,
            final_value: step.value,
            start_index: index - 1,
            end_index: index,
        }
    }

    /// Fold an older adjacent step into this group.
    ///
    /// Returns false (leaving the group untouched) if the step cannot merge.
    pub fn absorb_older(&mut self, step: StepChange, index: usize) -> bool {
        if !self.change.is_mergeable() || step.change != self.change || index != self.start_index {
            return false;
        }
        self.total_delta = self.total_delta.saturating_add(step.delta);
        self.count += 1;
        self.start_index = index - 1;
        true
    }

    /// One-line English description, e.g. `"Ana life -3 (37)"`.
    ///
    /// The bracketed counter is left off when `final_value` is not an
    /// amount, which only happens for hand-built groups.
    #[must_use]
    pub fn describe(&self, roster: &Roster) -> String {
        let name = |id: PlayerId| roster.name_of(id);
        let counter = match self.final_value {
            FinalValue::Amount(value) => format!(" ({value})"),
            _ => String::new(),
        };
        match self.change {
            Change::Life { player } => {
                format!("{} life {:+}{}", name(player), self.total_delta, counter)
            }
            Change::Poison { player } => {
                format!("{} poison {:+}{}", name(player), self.total_delta, counter)
            }
            Change::CommanderDamage { defender, attacker } => format!(
                "{} commander damage from {} {:+}{}",
                name(defender),
                name(attacker),
                self.total_delta,
                counter
            ),
            Change::Elimination { player } => match self.final_value {
                FinalValue::Eliminated(true) => format!("{} eliminated", name(player)),
                _ => format!("{} revived", name(player)),
            },
            Change::Immunity { player } => match self.final_value {
                FinalValue::Immune(true) => format!("{} immune", name(player)),
                _ => format!("{} no longer immune", name(player)),
            },
            Change::Unchanged => "no change".to_string(),
        }
    }
}
