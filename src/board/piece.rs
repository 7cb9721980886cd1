//! Pieces and their movement rules.
//!
//! Each `PieceType` variant owns its set of movement offsets. The board asks
//! a piece for its offsets and never special-cases a type, so adding a
//! variant only touches this file.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Delta, PlayerId};

/// Movement offsets for one piece type.
pub type Offsets = SmallVec<[Delta; 8]>;

/// Kind of piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// Moves one square in any of the eight directions. Losing every king
    /// eliminates a player.
    King,
}

impl PieceType {
    /// Offsets this piece type may move by, in generation order.
    ///
    /// ```
    /// use king_arena::board::PieceType;
    ///
    /// assert_eq!(PieceType::King.offsets().len(), 8);
    /// ```
    #[must_use]
    pub fn offsets(self) -> Offsets {
        match self {
            PieceType::King => (-1..=1)
                .flat_map(|dx| (-1..=1).map(move |dy| Delta::new(dx, dy)))
                .filter(|d| !d.is_zero())
                .collect(),
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::King => f.write_str("King"),
        }
    }
}

/// A typed piece belonging to one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub owner: PlayerId,
}

impl Piece {
    #[must_use]
    pub fn new(kind: PieceType, owner: PlayerId) -> Self {
        Self { kind, owner }
    }

    /// Shorthand for a king owned by `owner`.
    #[must_use]
    pub fn king(owner: impl Into<PlayerId>) -> Self {
        Self::new(PieceType::King, owner.into())
    }

    /// Check if this piece belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: &PlayerId) -> bool {
        &self.owner == player
    }

    /// Offsets this piece may move by.
    #[must_use]
    pub fn offsets(&self) -> Offsets {
        self.kind.offsets()
    }
}
