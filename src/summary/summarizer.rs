//! History summarization: attribute each step, then merge adjacent runs.
//!
//! ## Attribution
//!
//! Each step `(history[i - 1], history[i])` is attributed to exactly one
//! change, checked in priority order across players in roster order:
//!
//! 1. life (unless fully explained by a commander-damage change on the
//!    same player, which the commander-damage entry subsumes)
//! 2. poison
//! 3. elimination flip
//! 4. commander damage, per (defender, attacker)
//! 5. immunity flip
//!
//! A step matching none of these is `Unchanged`. The engine only produces
//! steps with a single attributable change, so the first match is the
//! whole story.
//!
//! ## Merging
//!
//! Walking newest to oldest, a step joins the previous group when both
//! carry the same [`Change`] and the change is mergeable.

use crate::core::{PlayerId, PlayerState, Roster, Snapshot};
use crate::session::History;

use super::change::{Change, ChangeGroup, FinalValue, StepChange};

/// Newest-first merged change log for a history.
///
/// Pure: the same history always yields the same groups.
#[must_use]
pub fn summarize(history: &History, roster: &Roster) -> Vec<ChangeGroup> {
    let snapshots: Vec<&Snapshot> = history.iter().collect();
    summarize_snapshots(&snapshots, roster)
}

/// [`summarize`] over a plain snapshot slice.
#[must_use]
pub fn summarize_snapshots(snapshots: &[&Snapshot], roster: &Roster) -> Vec<ChangeGroup> {
    let mut groups: Vec<ChangeGroup> = Vec::new();

    for index in (1..snapshots.len()).rev() {
        let step = detect_change(snapshots[index - 1], snapshots[index], roster);
        let merged = groups
            .last_mut()
            .is_some_and(|group| group.absorb_older(step, index));
        if !merged {
            groups.push(ChangeGroup::from_step(step, index));
        }
    }

    groups
}

/// Attribute the single change between two consecutive snapshots.
#[must_use]
pub fn detect_change(prev: &Snapshot, curr: &Snapshot, roster: &Roster) -> StepChange {
    let pairs: Vec<(PlayerId, &PlayerState, &PlayerState)> = roster
        .ids()
        .filter_map(|id| Some((id, prev.get(id)?, curr.get(id)?)))
        .collect();

    for &(player, before, after) in &pairs {
        let life = after.life().saturating_sub(before.life());
        if life != 0 && life != commander_damage_taken(before, after).saturating_neg() {
            return StepChange {
                change: Change::Life { player },
                delta: life,
                value: FinalValue::Amount(after.life()),
            };
        }
    }

    for &(player, before, after) in &pairs {
        if after.poison() != before.poison() {
            return StepChange {
                change: Change::Poison { player },
                delta: after.poison().saturating_sub(before.poison()),
                value: FinalValue::Amount(after.poison()),
            };
        }
    }

    for &(player, before, after) in &pairs {
        if after.is_eliminated() != before.is_eliminated() {
            return StepChange {
                change: Change::Elimination { player },
                delta: 0,
                value: FinalValue::Eliminated(after.is_eliminated()),
            };
        }
    }

    for &(defender, before, after) in &pairs {
        for &(attacker, dmg) in after.commander_damage() {
            let old = before.commander_damage_from(attacker).unwrap_or(0);
            if dmg != old {
                return StepChange {
                    change: Change::CommanderDamage { defender, attacker },
                    delta: dmg.saturating_sub(old),
                    value: FinalValue::Amount(dmg),
                };
            }
        }
    }

    for &(player, before, after) in &pairs {
        if after.is_immune() != before.is_immune() {
            return StepChange {
                change: Change::Immunity { player },
                delta: 0,
                value: FinalValue::Immune(after.is_immune()),
            };
        }
    }

    StepChange {
        change: Change::Unchanged,
        delta: 0,
        value: FinalValue::None,
    }
}

/// Net commander damage a player took between two snapshots.
fn commander_damage_taken(before: &PlayerState, after: &PlayerState) -> i64 {
    after
        .commander_damage()
        .iter()
        .map(|&(attacker, dmg)| {
            dmg.saturating_sub(before.commander_damage_from(attacker).unwrap_or(0))
        })
        .fold(0, i64::saturating_add)
}
