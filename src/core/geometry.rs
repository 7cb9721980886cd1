//! Grid geometry: positions and the offsets between them.
//!
//! ## Delta
//!
//! Integer displacement `(dx, dy)`. Magnitude is the Euclidean norm.
//!
//! ## Position
//!
//! Integer grid coordinate `(x, y)`. Positions are plain values; whether one
//! lies on a board is checked by the board at move time, not here.
//!
//! ```
//! use king_arena::core::{Delta, Position};
//!
//! let from = Position::new(2, 3);
//! let to = from.apply(Delta::new(1, -1));
//!
//! assert_eq!(to, Position::new(3, 2));
//! assert_eq!(from.delta_to(to), Delta::new(1, -1));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Default board width.
pub const BOARD_WIDTH: i32 = 8;

/// Default board height.
pub const BOARD_HEIGHT: i32 = 8;

/// Displacement between two positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    /// Create a new delta.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of this offset.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        f64::from(self.dx).hypot(f64::from(self.dy))
    }

    /// Check if this is the zero offset.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Self::Output {
        Delta::new(-self.dx, -self.dy)
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// Grid coordinate.
///
/// Ordering is by `x`, then `y`. Boards iterate positions in this order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by `delta`.
    #[must_use]
    pub const fn apply(self, delta: Delta) -> Position {
        Position::new(self.x + delta.dx, self.y + delta.dy)
    }

    /// Offset this position by `delta`, or `None` if a coordinate overflows.
    #[must_use]
    pub const fn checked_apply(self, delta: Delta) -> Option<Position> {
        match (self.x.checked_add(delta.dx), self.y.checked_add(delta.dy)) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }

    /// Offset from this position to `other`.
    #[must_use]
    pub const fn delta_to(self, other: Position) -> Delta {
        Delta::new(other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`.
    ///
    /// Computed in `f64`, so it is defined for any pair of positions.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Check if this position lies within a `width` x `height` grid anchored at the origin.
    #[must_use]
    pub const fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    fn add(self, delta: Delta) -> Self::Output {
        self.apply(delta)
    }
}

impl Sub for Position {
    type Output = Delta;

    /// `a - b` is the offset that takes `b` to `a`.
    fn sub(self, other: Position) -> Self::Output {
        other.delta_to(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
