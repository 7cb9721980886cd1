//! Multiplayer Elo ratings.
//!
//! - `elo`: expectation and stake formulas
//! - `history`: `GameHistory`, which turns finished games into pairwise updates

pub mod elo;
pub mod history;

pub use elo::{default_stake, expected_score, expected_score_with_scale, stake, DRAW, WIN};
pub use history::{GameHistory, RatingSnapshot};
