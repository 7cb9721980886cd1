//! Move representation: an origin and a destination.
//!
//! A `Move` is only a request. Whether it is legal depends on the board it is
//! applied to and the player making it; see `Board::move_piece`.

use serde::{Deserialize, Serialize};

use super::geometry::{Delta, Position};

/// A transition of one piece from `initial` to `destination`.
///
/// ```
/// use king_arena::core::{Delta, Move, Position};
///
/// let mv = Move::new(Position::new(0, 0), Position::new(1, 1));
/// assert_eq!(mv.delta(), Delta::new(1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the moving piece starts.
    pub initial: Position,
    /// Where the moving piece ends up.
    pub destination: Position,
}

impl Move {
    /// Create a move between two positions.
    #[must_use]
    pub const fn new(initial: Position, destination: Position) -> Self {
        Self {
            initial,
            destination,
        }
    }

    /// Create a move from `initial` by `delta`.
    #[must_use]
    pub const fn by(initial: Position, delta: Delta) -> Self {
        Self::new(initial, initial.apply(delta))
    }

    /// Offset covered by this move.
    #[must_use]
    pub const fn delta(&self) -> Delta {
        self.initial.delta_to(self.destination)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.initial, self.destination)
    }
}
