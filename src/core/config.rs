//! Engine configuration.
//!
//! - `GameConfig`: board dimensions and the draw countdown length
//! - `RatingConfig`: Elo parameters and the seed for rating randomness
//!
//! Both have defaults matching the standard ruleset and builder-style
//! `with_*` methods for overrides.

use serde::{Deserialize, Serialize};

use super::geometry::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::board::Board;

/// Number of quiet transitions before a game is drawn.
pub const DEFAULT_TURNS_UNTIL_DRAW: i32 = 50;

/// Rating assigned to a player with no recorded games.
pub const DEFAULT_INITIAL_RATING: f64 = 500.0;

/// Maximum rating change per pairwise result.
pub const DEFAULT_K_FACTOR: f64 = 16.0;

/// Rating difference at which the stronger side is expected to score ten times as often.
pub const DEFAULT_ELO_SCALE: f64 = 400.0;

/// Rules configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in squares.
    pub board_width: i32,

    /// Board height in squares.
    pub board_height: i32,

    /// Transitions without an elimination before the game is drawn.
    /// The countdown restarts at this value whenever a player dies.
    pub draw_turns: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            draw_turns: DEFAULT_TURNS_UNTIL_DRAW,
        }
    }
}

impl GameConfig {
    /// Override the board dimensions.
    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Override the draw countdown length.
    pub fn with_draw_turns(mut self, turns: i32) -> Self {
        self.draw_turns = turns;
        self
    }

    /// An empty board with the configured dimensions.
    #[must_use]
    pub fn empty_board(&self) -> Board {
        Board::with_dimensions(self.board_width, self.board_height)
    }
}

/// Parameters for multiplayer Elo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Rating of a player never seen before.
    pub initial_rating: f64,

    /// Stake multiplier for each pairwise update.
    pub k_factor: f64,

    /// Logistic scale of the expected-score curve.
    pub scale: f64,

    /// Seed for the survivor pick in `GameHistory::record_game`.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: DEFAULT_INITIAL_RATING,
            k_factor: DEFAULT_K_FACTOR,
            scale: DEFAULT_ELO_SCALE,
            seed: None,
        }
    }
}

impl RatingConfig {
    /// Override the starting rating.
    pub fn with_initial_rating(mut self, rating: f64) -> Self {
        self.initial_rating = rating;
        self
    }

    /// Override the K-factor.
    pub fn with_k_factor(mut self, k: f64) -> Self {
        self.k_factor = k;
        self
    }

    /// Use a fixed seed so repeated histories make the same random picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
