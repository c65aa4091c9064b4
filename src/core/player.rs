//! Player identification and the game roster.
//!
//! ## PlayerId
//!
//! Opaque player identifier handed in by the surrounding league. Ids are
//! unique within a game but carry no ordering meaning.
//!
//! ## Roster
//!
//! The ordered list of players seated for one game. Roster order is the
//! canonical iteration order for every per-player scan (elimination
//! recomputation, history summarization, default colors).

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

/// Player identifier, owned by the league system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A league player taking part in the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
        }
    }
}

/// Ordered, validated list of players for one game.
///
/// ## Example
///
/// ```
/// use commander_life::core::{Player, PlayerId, Roster};
///
/// let roster = Roster::new(vec![
///     Player::new(1, "Ana"),
///     Player::new(2, "Bruno"),
///     Player::new(3, "Caio"),
/// ]).unwrap();
///
/// assert_eq!(roster.len(), 3);
/// let opponents: Vec<_> = roster.opponents(PlayerId::new(2)).collect();
/// assert_eq!(opponents, vec![PlayerId::new(1), PlayerId::new(3)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterRepr")]
pub struct Roster {
    players: Vec<Player>,
}

/// Unchecked wire form of [`Roster`]; loading runs [`Roster::new`].
#[derive(Deserialize)]
struct RosterRepr {
    players: Vec<Player>,
}

impl TryFrom<RosterRepr> for Roster {
    type Error = LifeError;

    fn try_from(repr: RosterRepr) -> Result<Self> {
        Roster::new(repr.players)
    }
}

impl Roster {
    /// Build a roster, rejecting fewer than two players or repeated ids.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.len() < 2 {
            return Err(LifeError::NotEnoughPlayers { count: players.len() });
        }

        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id == player.id) {
                return Err(LifeError::DuplicatePlayer(player.id));
            }
        }

        Ok(Self { players })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate over player ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Iterate over every player except `player`, in roster order.
    pub fn opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.ids().filter(move |&id| id != player)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player)
    }

    /// Roster position of a player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player)
    }

    /// Display name, falling back to the id for unknown players.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> String {
        match self.get(player) {
            Some(p) => p.name.clone(),
            None => player.to_string(),
        }
    }

    /// Fail with `UnknownPlayer` unless `player` is seated.
    pub fn require(&self, player: PlayerId) -> Result<()> {
        if self.contains(player) {
            Ok(())
        } else {
            Err(LifeError::UnknownPlayer(player))
        }
    }
}
