//! Core value types: geometry, moves, players, RNG, configuration.
//!
//! Everything here is a plain value with no knowledge of the rules; the
//! `board` and `rules` modules build on top of it.

pub mod geometry;
pub mod action;
pub mod player;
pub mod rng;
pub mod config;

pub use geometry::{Delta, Position, BOARD_HEIGHT, BOARD_WIDTH};
pub use action::Move;
pub use player::{Agent, Color, Player, PlayerId, Seat};
pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, RatingConfig, DEFAULT_ELO_SCALE, DEFAULT_INITIAL_RATING, DEFAULT_K_FACTOR,
    DEFAULT_TURNS_UNTIL_DRAW,
};
