//! Move validation errors.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// Why a requested move was rejected.
///
/// Raised by `Board::move_piece` and passed through unchanged by
/// `GameState::apply_move`. The state a move was attempted on is never
/// modified, so callers can re-prompt and try again.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum IllegalMove {
    /// Nothing stands on the origin square.
    #[display("No piece at {_0}")]
    NoPiece(Position),

    /// The piece on the origin square belongs to another player.
    #[display("Piece at {position} belongs to {owner}, not {player}")]
    NotOwner {
        position: Position,
        owner: PlayerId,
        player: PlayerId,
    },

    /// The destination is off the board.
    #[display("Destination {_0} is out of bounds")]
    OutOfBounds(Position),

    /// The destination holds one of the mover's own pieces.
    #[display("Destination {_0} is occupied by a friendly piece")]
    FriendlyCapture(Position),

    /// The game has no players left to move.
    #[display("No active player")]
    NoActivePlayer,
}

impl IllegalMove {
    /// Human-readable explanation.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl std::error::Error for IllegalMove {}
