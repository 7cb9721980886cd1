//! Game state: board, turn order, death order, draw countdown.
//!
//! ## Transitions
//!
//! `GameState::apply_move` is the only transition. It returns a new state and
//! leaves the old one untouched, so a rejected move needs no rollback.
//!
//! After the active player's move:
//! - every other player without a king is appended to `dead_players`
//! - survivors keep their relative order
//! - the mover rotates to the back of `players`
//! - the draw countdown restarts if anyone died, otherwise it ticks down
//!
//! The mover is never checked for elimination. Under king-only rules a move
//! cannot remove the mover's own king.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::engine::GameResult;
use super::error::IllegalMove;
use super::view::AgentView;
use crate::board::Board;
use crate::core::{GameConfig, Move, PlayerId, DEFAULT_TURNS_UNTIL_DRAW};

/// Immutable snapshot of a game.
///
/// `players` and `dead_players` partition everyone who took part: a player
/// is in exactly one of them. `players[0]` moves next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: Vector<PlayerId>,
    dead_players: Vector<PlayerId>,
    turns_until_draw: i32,
    draw_turns: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty()
    }
}

impl GameState {
    /// A state with an empty default board and no players.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Board::empty(), std::iter::empty())
    }

    /// Start a game on `board` with `players` in turn order.
    #[must_use]
    pub fn new(board: Board, players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self::from_parts(board, players, DEFAULT_TURNS_UNTIL_DRAW)
    }

    /// Start a game using the draw countdown from `config`.
    #[must_use]
    pub fn with_config(
        config: &GameConfig,
        board: Board,
        players: impl IntoIterator<Item = PlayerId>,
    ) -> Self {
        Self::from_parts(board, players, config.draw_turns)
    }

    fn from_parts(
        board: Board,
        players: impl IntoIterator<Item = PlayerId>,
        draw_turns: i32,
    ) -> Self {
        Self {
            board,
            players: players.into_iter().collect(),
            dead_players: Vector::new(),
            turns_until_draw: draw_turns,
            draw_turns,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players still in the game, in move order.
    #[must_use]
    pub fn players(&self) -> &Vector<PlayerId> {
        &self.players
    }

    /// Eliminated players, earliest death first.
    #[must_use]
    pub fn dead_players(&self) -> &Vector<PlayerId> {
        &self.dead_players
    }

    /// Everyone who took part: active players, then the dead in death order.
    pub fn all_players(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().chain(self.dead_players.iter())
    }

    /// Number of players who took part.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len() + self.dead_players.len()
    }

    /// The player who moves next.
    #[must_use]
    pub fn active_player(&self) -> Option<&PlayerId> {
        self.players.front()
    }

    #[must_use]
    pub fn turns_until_draw(&self) -> i32 {
        self.turns_until_draw
    }

    /// Check if `player` has been eliminated.
    #[must_use]
    pub fn is_eliminated(&self, player: &PlayerId) -> bool {
        self.dead_players.iter().any(|dead| dead == player)
    }

    // === Outcome ===

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.turns_until_draw <= 0
    }

    /// The last player standing, if only one remains.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        if self.players.len() == 1 {
            self.players.front()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.is_draw() || self.winner().is_some()
    }

    /// The result of a finished game, `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.winner() {
            Some(GameResult::Winner(winner.clone()))
        } else if self.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    // === Transitions ===

    /// Apply the active player's move and derive the next state.
    ///
    /// Fails with the board's `IllegalMove` if the move is not legal for the
    /// active player, or `IllegalMove::NoActivePlayer` if nobody is left.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&self, mv: Move) -> Result<GameState, IllegalMove> {
        let active = self.active_player().ok_or(IllegalMove::NoActivePlayer)?;
        let board = self.board.move_piece(active, mv)?;

        let mut players = Vector::new();
        let mut dead_players = self.dead_players.clone();

        for player in self.players.iter().skip(1) {
            if board.is_alive(player) {
                players.push_back(player.clone());
            } else {
                info!(%player, by = %active, "player eliminated");
                dead_players.push_back(player.clone());
            }
        }
        players.push_back(active.clone());

        let someone_died = dead_players.len() > self.dead_players.len();
        let turns_until_draw = if someone_died {
            self.draw_turns
        } else {
            self.turns_until_draw - 1
        };

        debug!(
            next = ?players.front(),
            alive = players.len(),
            turns_until_draw,
            "move applied"
        );

        Ok(GameState {
            board,
            players,
            dead_players,
            turns_until_draw,
            draw_turns: self.draw_turns,
        })
    }

    /// A read-only view of this state for `player`.
    #[must_use]
    pub fn view_for(&self, player: PlayerId) -> AgentView<'_> {
        AgentView::new(self, player)
    }
}
