//! Elo expectation and stake arithmetic.

use crate::core::{DEFAULT_ELO_SCALE, DEFAULT_K_FACTOR};

/// Score credited for a decisive win.
pub const WIN: f64 = 1.0;

/// Score credited to each side of a draw.
pub const DRAW: f64 = 0.5;

/// Expected score of a player rated `rating_a` against one rated `rating_b`.
///
/// ```
/// use king_arena::rating::expected_score;
///
/// assert_eq!(expected_score(500.0, 500.0), 0.5);
/// assert!(expected_score(900.0, 500.0) > 0.9);
/// ```
#[must_use]
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    expected_score_with_scale(rating_a, rating_b, DEFAULT_ELO_SCALE)
}

/// `expected_score` with a custom logistic scale.
#[must_use]
pub fn expected_score_with_scale(rating_a: f64, rating_b: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / scale))
}

/// Rating points moved from loser to winner for one result.
///
/// Negative when the "winner" scored below expectation, as in a draw
/// against a weaker opponent.
#[must_use]
pub fn stake(rating_winner: f64, rating_loser: f64, score: f64, k_factor: f64, scale: f64) -> f64 {
    k_factor * (score - expected_score_with_scale(rating_winner, rating_loser, scale))
}

/// `stake` with the default K-factor and scale.
#[must_use]
pub fn default_stake(rating_winner: f64, rating_loser: f64, score: f64) -> f64 {
    stake(rating_winner, rating_loser, score, DEFAULT_K_FACTOR, DEFAULT_ELO_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score_symmetry() {
        let a = expected_score(650.0, 480.0);
        let b = expected_score(480.0, 650.0);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a > 0.5);
    }

    #[test]
    fn test_expected_score_400_points() {
        // 400 points ahead: 10:1 odds
        let e = expected_score(900.0, 500.0);
        assert!((e - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_stake_even_ratings() {
        assert_eq!(default_stake(500.0, 500.0, WIN), 8.0);
        assert_eq!(default_stake(500.0, 500.0, DRAW), 0.0);
    }

    #[test]
    fn test_stake_draw_against_weaker() {
        assert!(default_stake(700.0, 500.0, DRAW) < 0.0);
        assert!(default_stake(500.0, 700.0, DRAW) > 0.0);
    }

    #[test]
    fn test_custom_scale() {
        let e = expected_score_with_scale(600.0, 500.0, 100.0);
        assert!((e - 10.0 / 11.0).abs() < 1e-12);
    }
}
