//! Player identity and the agent capability.
//!
//! ## PlayerId
//!
//! Players are identified by name. Two players with the same name are the
//! same player as far as ownership and ratings are concerned.
//!
//! ## Player and Agent
//!
//! `Player` exposes identity and a display color. `Agent` extends it with a
//! move-selection policy. A driving loop asks a player for its agent
//! capability with `Player::as_agent` rather than downcasting.

use serde::{Deserialize, Serialize};

use super::action::Move;
use crate::rules::AgentView;

/// Name-based player identity.
///
/// ```
/// use king_arena::core::PlayerId;
///
/// let alice = PlayerId::new("alice");
/// assert_eq!(alice, PlayerId::from("alice"));
/// assert_eq!(alice.name(), "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player ID from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display color. The engine stores it for renderers and never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A participant in a game.
pub trait Player {
    /// Identity used for piece ownership and ratings.
    fn id(&self) -> &PlayerId;

    /// Display color.
    fn color(&self) -> Color;

    /// This player's move-selection capability, if it has one.
    ///
    /// Players driven from outside the engine (a human at a UI) return `None`.
    fn as_agent(&self) -> Option<&dyn Agent> {
        None
    }
}

/// A player that picks its own moves.
///
/// Implementations only see the game through an `AgentView`, which cannot
/// mutate anything.
pub trait Agent: Player {
    /// Choose a move for the current turn.
    ///
    /// The returned move is validated by the engine; an illegal choice is
    /// reported to the driving loop as `IllegalMove`.
    fn pick_move(&self, view: &AgentView<'_>) -> Move;
}

/// A player without a move-selection policy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    id: PlayerId,
    color: Color,
}

impl Seat {
    /// Create a seat for the named player.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

impl Player for Seat {
    fn id(&self) -> &PlayerId {
        &self.id
    }

    fn color(&self) -> Color {
        self.color
    }
}
