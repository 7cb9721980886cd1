//! Immutable board: a persistent map from position to piece.
//!
//! Every change returns a new `Board`. The map is an `im::OrdMap`, so the
//! old and new boards share structure and cloning is O(1). Iteration follows
//! position order (`x`, then `y`), which makes move enumeration deterministic.
//!
//! ## Legality
//!
//! `is_legal_move` and `move_piece` share one check, so a move is reported
//! legal exactly when applying it succeeds. Bounds are checked when a piece
//! moves, not when it is placed.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::piece::{Piece, PieceType};
use crate::core::{Move, PlayerId, Position, BOARD_HEIGHT, BOARD_WIDTH};
use crate::rules::IllegalMove;

/// Snapshot of piece placement.
///
/// ```
/// use king_arena::board::{Board, Piece};
/// use king_arena::core::{Move, PlayerId, Position};
///
/// let red = PlayerId::new("red");
/// let board = Board::empty().place_at(Position::new(0, 0), Piece::king("red"));
///
/// let moved = board
///     .move_piece(&red, Move::new(Position::new(0, 0), Position::new(0, 1)))
///     .unwrap();
///
/// assert!(board.get_at(Position::new(0, 0)).is_some());
/// assert!(moved.get_at(Position::new(0, 1)).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    pieces: OrdMap<Position, Piece>,
    width: i32,
    height: i32,
}

/// Serialized form: positions are not valid map keys in most formats, so
/// pieces are written as a list of pairs.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    width: i32,
    height: i32,
    pieces: Vec<(Position, Piece)>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            pieces: board.pieces.into_iter().collect(),
        }
    }
}

impl From<BoardRepr> for Board {
    fn from(repr: BoardRepr) -> Self {
        Self {
            pieces: repr.pieces.into_iter().collect(),
            width: repr.width,
            height: repr.height,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An empty board of the default size.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_dimensions(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// An empty board of the given size.
    #[must_use]
    pub fn with_dimensions(width: i32, height: i32) -> Self {
        Self {
            pieces: OrdMap::new(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position lies on this board.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.in_bounds(self.width, self.height)
    }

    // === Queries ===

    /// The piece at `position`, if any.
    #[must_use]
    pub fn get_at(&self, position: Position) -> Option<&Piece> {
        self.pieces.get(&position)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Iterate over all pieces in position order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.pieces.iter().map(|(pos, piece)| (*pos, piece))
    }

    /// Iterate over the pieces owned by `player`, in position order.
    pub fn pieces_of<'a>(
        &'a self,
        player: &'a PlayerId,
    ) -> impl Iterator<Item = (Position, &'a Piece)> + 'a {
        self.pieces().filter(move |(_, piece)| piece.is_owned_by(player))
    }

    /// Call `f` for every piece on the board, in position order.
    ///
    /// This is the feed for renderers.
    pub fn for_each_piece(&self, mut f: impl FnMut(Position, &Piece)) {
        for (position, piece) in self.pieces() {
            f(position, piece);
        }
    }

    /// Check if `player` owns at least one piece of type `kind`.
    #[must_use]
    pub fn has_piece_of_type(&self, player: &PlayerId, kind: PieceType) -> bool {
        self.pieces_of(player).any(|(_, piece)| piece.kind == kind)
    }

    /// Check if `player` still has a king.
    #[must_use]
    pub fn is_alive(&self, player: &PlayerId) -> bool {
        self.has_piece_of_type(player, PieceType::King)
    }

    // === Updates ===

    /// A new board with `piece` at `position`, replacing any previous occupant.
    #[must_use]
    pub fn place_at(&self, position: Position, piece: Piece) -> Board {
        Board {
            pieces: self.pieces.update(position, piece),
            ..self.clone()
        }
    }

    /// A new board with `position` emptied.
    #[must_use]
    pub fn remove_at(&self, position: Position) -> Board {
        Board {
            pieces: self.pieces.without(&position),
            ..self.clone()
        }
    }

    // === Moves ===

    /// Check if `player` may make `mv` on this board.
    ///
    /// True exactly when `move_piece` would succeed.
    #[must_use]
    pub fn is_legal_move(&self, player: &PlayerId, mv: Move) -> bool {
        self.check_move(player, mv).is_ok()
    }

    /// Apply `mv` for `player`, returning the resulting board.
    ///
    /// The moving piece leaves its origin and replaces whatever opposing
    /// piece stood on the destination. Fails if there is no piece at the
    /// origin, the piece belongs to someone else, the destination is off the
    /// board, or the destination holds one of the player's own pieces.
    pub fn move_piece(&self, player: &PlayerId, mv: Move) -> Result<Board, IllegalMove> {
        let piece = self.check_move(player, mv)?.clone();

        if let Some(captured) = self.get_at(mv.destination) {
            trace!(%mv, victim = %captured.owner, "capture");
        }

        Ok(Board {
            pieces: self.pieces.without(&mv.initial).update(mv.destination, piece),
            ..self.clone()
        })
    }

    /// Lazily enumerate the legal moves of `player`.
    ///
    /// Pieces are visited in position order and each piece's offsets in the
    /// order its type generates them. Call again to restart.
    pub fn legal_moves<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = Move> + 'a {
        self.pieces_of(player).flat_map(move |(position, piece)| {
            piece
                .offsets()
                .into_iter()
                .filter_map(move |delta| position.checked_apply(delta))
                .map(move |destination| Move::new(position, destination))
                .filter(move |mv| self.is_legal_move(player, *mv))
        })
    }

    fn check_move(&self, player: &PlayerId, mv: Move) -> Result<&Piece, IllegalMove> {
        let piece = self
            .get_at(mv.initial)
            .ok_or(IllegalMove::NoPiece(mv.initial))?;

        if !piece.is_owned_by(player) {
            return Err(IllegalMove::NotOwner {
                position: mv.initial,
                owner: piece.owner.clone(),
                player: player.clone(),
            });
        }

        if !self.in_bounds(mv.destination) {
            return Err(IllegalMove::OutOfBounds(mv.destination));
        }

        if let Some(target) = self.get_at(mv.destination) {
            if target.is_owned_by(player) {
                return Err(IllegalMove::FriendlyCapture(mv.destination));
            }
        }

        Ok(piece)
    }
}
