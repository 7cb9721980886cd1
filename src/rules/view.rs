//! Read-only projection of a game for one player.
//!
//! Agents decide their moves from an `AgentView`. It borrows the state
//! immutably and only offers queries, so an agent cannot change the game
//! except by returning a move for the engine to validate.

use crate::board::{Board, PieceType};
use crate::core::{Move, PlayerId, Position};

use super::state::GameState;

/// What one player may look at when choosing a move.
#[derive(Clone, Debug)]
pub struct AgentView<'a> {
    state: &'a GameState,
    player: PlayerId,
}

impl<'a> AgentView<'a> {
    /// View `state` as `player`.
    #[must_use]
    pub fn new(state: &'a GameState, player: PlayerId) -> Self {
        Self { state, player }
    }

    /// The viewing player.
    #[must_use]
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.state.board()
    }

    /// Check if the viewing player moves next.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.state.active_player() == Some(&self.player)
    }

    /// Transitions left before the game is drawn.
    #[must_use]
    pub fn turns_until_draw(&self) -> i32 {
        self.state.turns_until_draw()
    }

    /// Active players other than the viewer, in move order.
    pub fn opponents(&self) -> impl Iterator<Item = &PlayerId> {
        self.state.players().iter().filter(move |p| **p != self.player)
    }

    /// Positions of the viewer's pieces of type `kind`.
    pub fn positions(&self, kind: PieceType) -> impl Iterator<Item = Position> + '_ {
        self.state
            .board()
            .pieces_of(&self.player)
            .filter(move |(_, piece)| piece.kind == kind)
            .map(|(position, _)| position)
    }

    /// The opposing piece of type `kind` nearest to `position`.
    ///
    /// Distance is Euclidean. On a tie the piece met first in board order wins.
    #[must_use]
    pub fn closest_opponent(&self, position: Position, kind: PieceType) -> Option<Position> {
        let mut closest: Option<(Position, f64)> = None;

        for (candidate, piece) in self.state.board().pieces() {
            if piece.kind != kind || piece.is_owned_by(&self.player) {
                continue;
            }

            let distance = position.distance_to(candidate);
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((candidate, distance));
            }
        }

        closest.map(|(candidate, _)| candidate)
    }

    /// The viewer's legal moves on the current board.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.state.board().legal_moves(&self.player)
    }
}
