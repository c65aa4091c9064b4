//! The life-counter session engine.
//!
//! A [`LifeSession`] owns the snapshot history for one game sitting. Every
//! command follows the same shape:
//!
//! 1. Validate player ids against the roster (reject before mutating).
//! 2. Clone the latest snapshot (O(1) thanks to `im`).
//! 3. Apply exactly one change.
//! 4. Recompute elimination for every player.
//! 5. Append the new snapshot.
//!
//! Cosmetic state (seating order, colors) sits beside the history and is
//! never recorded in it.

use crate::core::{
    AppliedDelta, Delta, Field, Player, PlayerId, Roster, SessionConfig, Snapshot,
};
use crate::error::{LifeError, Result};
use crate::summary::{summarize, ChangeGroup};

use super::history::History;
use super::report::MatchReporter;
use super::table::{PlayerColor, PlayerTheme, Seating};

/// One game sitting: roster, snapshot history and table layout.
///
/// ## Example
///
/// ```
/// use commander_life::core::{Player, PlayerId};
/// use commander_life::session::LifeSession;
///
/// let mut session = LifeSession::initialize(
///     vec![Player::new(1, "Ana"), Player::new(2, "Bruno")],
///     40,
/// ).unwrap();
///
/// session.adjust_life(PlayerId::new(2), -40).unwrap();
/// assert_eq!(session.current_winner(), Some(PlayerId::new(1)));
///
/// session.revert_last_action();
/// assert_eq!(session.current_winner(), None);
/// ```
#[derive(Clone, Debug)]
pub struct LifeSession {
    roster: Roster,
    config: SessionConfig,
    history: History,
    theme: PlayerTheme,
    seating: Seating,
}

impl LifeSession {
    /// Start a session with the given configuration.
    pub fn new(players: Vec<Player>, config: SessionConfig) -> Result<Self> {
        let roster = Roster::new(players).inspect_err(|err| {
            tracing::warn!(%err, "rejected life-counter roster");
        })?;
        let history = History::new(Snapshot::initial(&roster, config.starting_life));
        let theme = PlayerTheme::new(&roster);
        let seating = Seating::new(&roster);

        tracing::debug!(
            players = roster.len(),
            starting_life = config.starting_life,
            "life-counter session started"
        );

        Ok(Self {
            roster,
            config,
            history,
            theme,
            seating,
        })
    }

    /// Start a session with default settings and a custom starting life.
    pub fn initialize(players: Vec<Player>, starting_life: i64) -> Result<Self> {
        Self::new(players, SessionConfig::default().with_starting_life(starting_life))
    }

    /// Throw away everything and start over with the same players.
    ///
    /// History shrinks back to the single initial snapshot; seating and
    /// colors return to their defaults.
    pub fn reset(&mut self) {
        let discarded = self.history.len();
        self.history = History::new(Snapshot::initial(&self.roster, self.config.starting_life));
        self.theme = PlayerTheme::new(&self.roster);
        self.seating = Seating::new(&self.roster);
        tracing::debug!(discarded, "life-counter session reset");
    }

    // === Queries ===

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The authoritative current state.
    #[must_use]
    pub fn latest(&self) -> &Snapshot {
        self.history.latest()
    }

    #[must_use]
    pub fn snapshot_at(&self, index: usize) -> Option<&Snapshot> {
        self.history.get(index)
    }

    /// The sole surviving player, if exactly one remains.
    ///
    /// Derived from the latest snapshot on every call.
    #[must_use]
    pub fn current_winner(&self) -> Option<PlayerId> {
        self.latest().provisional_winner(&self.roster)
    }

    /// Merged, newest-first change log.
    #[must_use]
    pub fn summary(&self) -> Vec<ChangeGroup> {
        summarize(&self.history, &self.roster)
    }

    #[must_use]
    pub fn seating(&self) -> &[PlayerId] {
        self.seating.order()
    }

    #[must_use]
    pub fn theme(&self) -> &PlayerTheme {
        &self.theme
    }

    #[must_use]
    pub fn color_of(&self, player: PlayerId) -> Option<PlayerColor> {
        self.theme.color(player)
    }

    // === Game commands ===

    /// Apply one delta on top of the latest snapshot.
    ///
    /// Returns the resulting life change of the affected player.
    pub fn apply_delta(&mut self, delta: Delta) -> Result<AppliedDelta> {
        self.validate(&delta).inspect_err(|err| {
            tracing::warn!(%err, ?delta, "rejected delta");
        })?;

        let mut next = self.latest().clone();
        let player = delta.player();
        let Some(state) = next.get_mut(player) else {
            return Err(LifeError::UnknownPlayer(player));
        };

        // `validate` has already checked the attacker, so `None` here can only
        // mean a counter would overflow. The snapshot is dropped unpushed.
        let life_delta = match delta {
            Delta::Life { amount, .. } => state.add_life(amount),
            Delta::Poison { amount, .. } => state.add_poison(amount).map(|_| 0),
            Delta::CommanderDamage {
                attacker, amount, ..
            } => state.add_commander_damage(attacker, amount).map(|applied| -applied),
        }
        .ok_or(LifeError::CounterOverflow { player })
        .inspect_err(|err| {
            tracing::warn!(%err, ?delta, "rejected delta");
        })?;

        next.recompute_eliminations();
        self.history.push(next);

        tracing::debug!(
            player = %player,
            field = ?delta.field(),
            amount = delta.amount(),
            life_delta,
            step = self.history.len() - 1,
            "applied delta"
        );

        Ok(AppliedDelta { player, life_delta })
    }

    /// Field-oriented form of [`apply_delta`](Self::apply_delta).
    pub fn apply(
        &mut self,
        player: PlayerId,
        field: Field,
        amount: i64,
        opponent: Option<PlayerId>,
    ) -> Result<AppliedDelta> {
        let delta = Delta::from_field(player, field, amount, opponent).inspect_err(|err| {
            tracing::warn!(%err, ?field, "rejected delta");
        })?;
        self.apply_delta(delta)
    }

    pub fn adjust_life(&mut self, player: PlayerId, amount: i64) -> Result<AppliedDelta> {
        self.apply_delta(Delta::Life { player, amount })
    }

    pub fn adjust_poison(&mut self, player: PlayerId, amount: i64) -> Result<AppliedDelta> {
        self.apply_delta(Delta::Poison { player, amount })
    }

    pub fn adjust_commander_damage(
        &mut self,
        defender: PlayerId,
        attacker: PlayerId,
        amount: i64,
    ) -> Result<AppliedDelta> {
        self.apply_delta(Delta::CommanderDamage {
            defender,
            attacker,
            amount,
        })
    }

    /// Flip a player's immunity and record the new state.
    pub fn toggle_immunity(&mut self, player: PlayerId) -> Result<()> {
        self.roster.require(player).inspect_err(|err| {
            tracing::warn!(%err, "rejected immunity toggle");
        })?;

        let mut next = self.latest().clone();
        let Some(state) = next.get_mut(player) else {
            return Err(LifeError::UnknownPlayer(player));
        };
        state.toggle_immunity();
        let immune = state.is_immune();

        next.recompute_eliminations();
        self.history.push(next);

        tracing::debug!(player = %player, immune, "toggled immunity");
        Ok(())
    }

    /// Truncate history so `history[index]` becomes the current state.
    ///
    /// Reverting to the current index is a no-op (`Ok(false)`).
    pub fn revert_to_index(&mut self, index: usize) -> Result<bool> {
        let before = self.history.len();
        let reverted = self.history.truncate_to(index).inspect_err(|err| {
            tracing::warn!(%err, "rejected revert");
        })?;
        if reverted {
            tracing::debug!(index, dropped = before - self.history.len(), "reverted history");
        }
        Ok(reverted)
    }

    /// Undo the most recent step. Returns false if there is nothing to undo.
    pub fn revert_last_action(&mut self) -> bool {
        let len = self.history.len();
        if len < 2 {
            return false;
        }
        self.revert_to_index(len - 2).unwrap_or(false)
    }

    /// Undo a whole merged run from the change log.
    pub fn revert_group(&mut self, group: &ChangeGroup) -> Result<bool> {
        self.revert_to_index(group.start_index)
    }

    /// Accept the provisional winner and hand it to the league.
    pub fn confirm_winner(&self, reporter: &mut impl MatchReporter) -> Result<PlayerId> {
        let winner = self
            .current_winner()
            .ok_or(LifeError::NoProvisionalWinner)
            .inspect_err(|err| {
                tracing::warn!(%err, "rejected winner confirmation");
            })?;
        tracing::debug!(winner = %winner, steps = self.history.len(), "winner confirmed");
        reporter.record_win(winner);
        Ok(winner)
    }

    // === Cosmetic commands ===

    /// Change the display order. Does not touch history.
    pub fn reorder(&mut self, order: Vec<PlayerId>) -> Result<()> {
        self.seating.reorder(&self.roster, order).inspect_err(|err| {
            tracing::warn!(%err, "rejected seating order");
        })
    }

    /// Change a player's color. Does not touch history.
    pub fn set_theme(&mut self, player: PlayerId, color_index: usize) -> Result<()> {
        self.theme.set(player, color_index).inspect_err(|err| {
            tracing::warn!(%err, color_index, "rejected theme change");
        })
    }

    fn validate(&self, delta: &Delta) -> Result<()> {
        match *delta {
            Delta::Life { player, .. } | Delta::Poison { player, .. } => self.roster.require(player),
            Delta::CommanderDamage {
                defender, attacker, ..
            } => {
                self.roster.require(defender)?;
                if attacker == defender {
                    return Err(LifeError::SelfCommanderDamage(defender));
                }
                if !self.roster.contains(attacker) {
                    return Err(LifeError::UnknownOpponent { defender, attacker });
                }
                Ok(())
            }
        }
    }
}
