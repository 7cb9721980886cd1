//! Board state: pieces, movement rules, move validation.

#[allow(clippy::module_inception)]
pub mod board;
pub mod piece;

pub use board::Board;
pub use piece::{Offsets, Piece, PieceType};
