//! Per-player life-counter state and whole-table snapshots.
//!
//! ## PlayerState
//!
//! Life, poison, commander damage by attacker, immunity, and the derived
//! elimination flag. The flag is never written directly: it is recomputed
//! from the other fields by [`PlayerState::recompute_elimination`].
//!
//! ## Snapshot
//!
//! The complete table state at one instant. Backed by an `im::OrdMap` so
//! cloning the latest snapshot to derive the next one shares structure
//! with every earlier snapshot in the history.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{COMMANDER_DAMAGE_LIMIT, POISON_LIMIT};
use super::player::{PlayerId, Roster};

/// Why a player meets an elimination condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    /// Life total at or below zero.
    Life,
    /// Ten or more poison counters.
    Poison,
    /// 21 or more commander damage from one opponent.
    CommanderDamage(PlayerId),
}

/// Life-counter state for one player.
///
/// Commander damage keeps one entry per opponent in roster order.
/// SmallVec holds the three opponents of a four-player pod inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    life: i64,
    poison: i64,
    commander_damage: SmallVec<[(PlayerId, i64); 3]>,
    is_immune: bool,
    is_eliminated: bool,
}

impl PlayerState {
    /// Fresh state: full life, no counters, zero damage from every opponent.
    pub fn new(starting_life: i64, opponents: impl IntoIterator<Item = PlayerId>) -> Self {
        let mut state = Self {
            life: starting_life,
            poison: 0,
            commander_damage: opponents.into_iter().map(|id| (id, 0)).collect(),
            is_immune: false,
            is_eliminated: false,
        };
        state.recompute_elimination();
        state
    }

    #[must_use]
    pub fn life(&self) -> i64 {
        self.life
    }

    #[must_use]
    pub fn poison(&self) -> i64 {
        self.poison
    }

    /// Commander damage taken from `attacker`, or `None` if not an opponent.
    #[must_use]
    pub fn commander_damage_from(&self, attacker: PlayerId) -> Option<i64> {
        self.commander_damage
            .iter()
            .find(|(id, _)| *id == attacker)
            .map(|&(_, dmg)| dmg)
    }

    /// All (attacker, damage) tallies in roster order.
    #[must_use]
    pub fn commander_damage(&self) -> &[(PlayerId, i64)] {
        &self.commander_damage
    }

    #[must_use]
    pub fn is_immune(&self) -> bool {
        self.is_immune
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.is_eliminated
    }

    /// First elimination condition this player meets, ignoring immunity.
    ///
    /// Checked in the order life, poison, commander damage.
    #[must_use]
    pub fn elimination_cause(&self) -> Option<EliminationCause> {
        if self.life <= 0 {
            return Some(EliminationCause::Life);
        }
        if self.poison >= POISON_LIMIT {
            return Some(EliminationCause::Poison);
        }
        self.commander_damage
            .iter()
            .find(|(_, dmg)| *dmg >= COMMANDER_DAMAGE_LIMIT)
            .map(|&(attacker, _)| EliminationCause::CommanderDamage(attacker))
    }

    /// The value `is_eliminated` must hold for the current fields.
    #[must_use]
    pub fn should_be_eliminated(&self) -> bool {
        !self.is_immune && self.elimination_cause().is_some()
    }

    /// Re-derive `is_eliminated`. Idempotent.
    pub fn recompute_elimination(&mut self) {
        self.is_eliminated = self.should_be_eliminated();
    }

    // === Mutation (engine only) ===
    //
    // Each mutator computes every new value before writing any field and
    // returns `None` on overflow, leaving the state untouched.

    pub(crate) fn add_life(&mut self, amount: i64) -> Option<i64> {
        self.life = self.life.checked_add(amount)?;
        Some(amount)
    }

    /// Add poison, clamped at zero. Returns the applied change.
    pub(crate) fn add_poison(&mut self, amount: i64) -> Option<i64> {
        let old = self.poison;
        self.poison = old.checked_add(amount)?.max(0);
        Some(self.poison - old)
    }

    /// Add commander damage from `attacker`, clamped at zero, and lose the
    /// same amount of life. Returns the applied damage change, or `None` if
    /// `attacker` is not an opponent or a counter would overflow.
    pub(crate) fn add_commander_damage(&mut self, attacker: PlayerId, amount: i64) -> Option<i64> {
        let slot = self
            .commander_damage
            .iter()
            .position(|(id, _)| *id == attacker)?;
        let old = self.commander_damage[slot].1;
        let damage = old.checked_add(amount)?.max(0);
        // Both tallies are non-negative, so the difference fits.
        let applied = damage - old;
        let life = self.life.checked_sub(applied)?;

        self.commander_damage[slot].1 = damage;
        self.life = life;
        Some(applied)
    }

    pub(crate) fn toggle_immunity(&mut self) {
        self.is_immune = !self.is_immune;
    }
}

/// Complete per-player state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    players: OrdMap<PlayerId, PlayerState>,
}

impl Snapshot {
    /// The all-default snapshot a game starts from.
    #[must_use]
    pub fn initial(roster: &Roster, starting_life: i64) -> Self {
        let players = roster
            .ids()
            .map(|id| (id, PlayerState::new(starting_life, roster.opponents(id))))
            .collect();
        Self { players }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(&player)
    }

    pub(crate) fn get_mut(&mut self, player: PlayerId) -> Option<&mut PlayerState> {
        self.players.get_mut(&player)
    }

    /// Number of players in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over (PlayerId, &PlayerState) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players.iter().map(|(id, state)| (*id, state))
    }

    /// Re-derive `is_eliminated` for every player.
    ///
    /// Always a full pass; running it twice yields the same snapshot.
    pub fn recompute_eliminations(&mut self) {
        let ids: SmallVec<[PlayerId; 4]> = self.players.keys().copied().collect();
        for id in ids {
            if let Some(state) = self.players.get_mut(&id) {
                state.recompute_elimination();
            }
        }
    }

    /// Players still in the game, in roster order.
    pub fn survivors<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = PlayerId> + 'a {
        roster
            .ids()
            .filter(move |id| self.get(*id).is_some_and(|s| !s.is_eliminated()))
    }

    /// The sole non-eliminated player, if exactly one remains among two or
    /// more.
    #[must_use]
    pub fn provisional_winner(&self, roster: &Roster) -> Option<PlayerId> {
        if roster.len() < 2 {
            return None;
        }
        let mut survivors = self.survivors(roster);
        let first = survivors.next()?;
        match survivors.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}
