//! # king-arena
//!
//! A turn-based multiplayer rules engine for king-only arenas, with
//! cross-game multiplayer Elo ratings.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: `Board` and `GameState` are values. Every move
//!    produces a new one and leaves the old one intact.
//!
//! 2. **N-Player First**: Turn order, elimination and ratings work for any
//!    number of players. Nothing assumes two.
//!
//! 3. **Policies Outside**: The engine validates moves; choosing them is
//!    the job of an `Agent`, which only ever sees an `AgentView`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, shared
//!   structure between successive boards.
//!
//! - **Deterministic Ordering**: Boards iterate in position order, so move
//!   enumeration is reproducible.
//!
//! - **Seeded Ratings**: The one random step in rating updates draws from a
//!   seedable ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Geometry, moves, players, RNG, configuration
//! - `board`: Pieces and the immutable board
//! - `rules`: Game state transitions, agent view, driving loop
//! - `rating`: Multiplayer Elo history
//!
//! ## Example
//!
//! ```
//! use king_arena::{Board, GameHistory, GameState, Move, Piece, PlayerId, Position};
//!
//! let board = Board::empty()
//!     .place_at(Position::new(0, 0), Piece::king("p1"))
//!     .place_at(Position::new(1, 1), Piece::king("p2"));
//! let state = GameState::new(board, [PlayerId::new("p1"), PlayerId::new("p2")]);
//!
//! let done = state
//!     .apply_move(Move::new(Position::new(0, 0), Position::new(1, 1)))
//!     .unwrap();
//! assert_eq!(done.winner(), Some(&PlayerId::new("p1")));
//!
//! let mut history = GameHistory::new();
//! history.record_game(&done);
//! assert!(history.current_rating(&PlayerId::new("p1")) > 500.0);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod rating;

// Re-export commonly used types
pub use crate::core::{
    Delta, Position, BOARD_HEIGHT, BOARD_WIDTH,
    Move,
    Agent, Color, Player, PlayerId, Seat,
    GameRng, GameRngState,
    GameConfig, RatingConfig,
};

pub use crate::board::{Board, Piece, PieceType};

pub use crate::rules::{
    AgentView, GameResult, GameRunner, GameState, IllegalMove, RunError, RunOutcome,
};

pub use crate::rating::{expected_score, GameHistory, RatingSnapshot};
