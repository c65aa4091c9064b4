//! Cosmetic table layout: seating order and player colors.
//!
//! Neither lives in the snapshot history. Changing them never creates an
//! undo step and never affects elimination or winner detection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};
use crate::error::{LifeError, Result};

/// Player colors, assigned cyclically by roster position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Blue,
    Red,
    Green,
    Yellow,
}

/// The color palette, indexed by color index.
pub const PALETTE: [PlayerColor; 4] = [
    PlayerColor::Blue,
    PlayerColor::Red,
    PlayerColor::Green,
    PlayerColor::Yellow,
];

impl PlayerColor {
    /// Resolve any color index, wrapping around the palette.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// Per-player color index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTheme {
    colors: FxHashMap<PlayerId, usize>,
}

impl PlayerTheme {
    /// Default assignment: roster position modulo palette size.
    #[must_use]
    pub fn new(roster: &Roster) -> Self {
        let colors = roster
            .ids()
            .enumerate()
            .map(|(i, id)| (id, i % PALETTE.len()))
            .collect();
        Self { colors }
    }

    #[must_use]
    pub fn color_index(&self, player: PlayerId) -> Option<usize> {
        self.colors.get(&player).copied()
    }

    #[must_use]
    pub fn color(&self, player: PlayerId) -> Option<PlayerColor> {
        self.color_index(player).map(PlayerColor::from_index)
    }

    pub fn set(&mut self, player: PlayerId, color_index: usize) -> Result<()> {
        match self.colors.get_mut(&player) {
            Some(slot) => {
                *slot = color_index;
                Ok(())
            }
            None => Err(LifeError::UnknownPlayer(player)),
        }
    }
}

/// Display order of the players around the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seating {
    order: Vec<PlayerId>,
}

impl Seating {
    /// Seat players in roster order.
    #[must_use]
    pub fn new(roster: &Roster) -> Self {
        Self {
            order: roster.ids().collect(),
        }
    }

    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Replace the order. `order` must be a permutation of the roster.
    pub fn reorder(&mut self, roster: &Roster, order: Vec<PlayerId>) -> Result<()> {
        if order.len() != roster.len() {
            return Err(LifeError::InvalidSeating);
        }
        for (i, id) in order.iter().enumerate() {
            if !roster.contains(*id) || order[..i].contains(id) {
                return Err(LifeError::InvalidSeating);
            }
        }
        self.order = order;
        Ok(())
    }
}
