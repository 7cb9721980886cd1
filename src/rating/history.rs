//! Cross-game rating history using pairwise multiplayer Elo.
//!
//! ## Recording a game
//!
//! A finished game is folded into ratings as a set of pairwise results:
//!
//! 1. Every participant gets `1 / player_count` added to its tally, and the
//!    game counter goes up once per participant.
//! 2. Along the death order, each player beats the one who died just before.
//! 3. A random survivor beats the last player to die.
//! 4. Every pair of survivors draws.
//!
//! Step 3 uses the history's own seeded RNG, so two histories built from the
//! same `RatingConfig::seed` record identical games identically.
//!
//! ## Ownership
//!
//! `GameHistory` is an ordinary value. Callers create one per rating session
//! and pass it where games are recorded. Mutators take `&mut self`; sharing
//! across threads needs an external lock.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::elo::{expected_score_with_scale, stake, DRAW, WIN};
use crate::core::{GameRng, GameRngState, PlayerId, RatingConfig};
use crate::rules::GameState;

/// Accumulated ratings and tallies across games.
#[derive(Clone, Debug)]
pub struct GameHistory {
    config: RatingConfig,
    ratings: FxHashMap<PlayerId, f64>,
    wins: FxHashMap<PlayerId, f64>,
    total_games: u64,
    rng: GameRng,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// An empty history with the default Elo parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RatingConfig::default())
    }

    /// An empty history with custom parameters.
    #[must_use]
    pub fn with_config(config: RatingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            config,
            ratings: FxHashMap::default(),
            wins: FxHashMap::default(),
            total_games: 0,
            rng,
        }
    }

    /// Rebuild a history from a snapshot.
    #[must_use]
    pub fn restore(config: RatingConfig, snapshot: &RatingSnapshot) -> Self {
        Self {
            config,
            ratings: snapshot.ratings.iter().map(|(p, r)| (p.clone(), *r)).collect(),
            wins: snapshot.wins.iter().map(|(p, w)| (p.clone(), *w)).collect(),
            total_games: snapshot.total_games,
            rng: GameRng::from_state(&snapshot.rng),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    // === Queries ===

    /// Current rating of `player`, or the initial rating if never rated.
    #[must_use]
    pub fn current_rating(&self, player: &PlayerId) -> f64 {
        self.ratings
            .get(player)
            .copied()
            .unwrap_or(self.config.initial_rating)
    }

    /// Expected score of a player rated `rating_a` against one rated `rating_b`.
    #[must_use]
    pub fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64 {
        expected_score_with_scale(rating_a, rating_b, self.config.scale)
    }

    /// Accumulated participation tally for `player`.
    #[must_use]
    pub fn wins(&self, player: &PlayerId) -> f64 {
        self.wins.get(player).copied().unwrap_or(0.0)
    }

    /// Game counter, incremented once per participant of every recorded game.
    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    /// Rated players, best first. Equal ratings are ordered by name.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<(PlayerId, f64)> {
        let mut board: Vec<_> = self
            .ratings
            .iter()
            .map(|(player, rating)| (player.clone(), *rating))
            .collect();

        board.sort_by(|(pa, ra), (pb, rb)| rb.total_cmp(ra).then_with(|| pa.cmp(pb)));
        board
    }

    /// Serializable copy of the history, including the RNG position.
    #[must_use]
    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot {
            ratings: self.ratings.iter().map(|(p, r)| (p.clone(), *r)).collect(),
            wins: self.wins.iter().map(|(p, w)| (p.clone(), *w)).collect(),
            total_games: self.total_games,
            rng: self.rng.state(),
        }
    }

    // === Updates ===

    /// Shift `delta` rating points onto `player`.
    pub fn adjust_rating(&mut self, player: &PlayerId, delta: f64) {
        let rating = self.current_rating(player) + delta;
        self.ratings.insert(player.clone(), rating);
    }

    /// Settle one pairwise result and return the stake moved.
    ///
    /// `score` is from the winner's side: `1.0` for a win, `0.5` for a draw.
    /// The stake is added to the winner and taken from the loser.
    pub fn update_rating(&mut self, winner: &PlayerId, loser: &PlayerId, score: f64) -> f64 {
        let rating_winner = self.current_rating(winner);
        let rating_loser = self.current_rating(loser);
        let moved = stake(
            rating_winner,
            rating_loser,
            score,
            self.config.k_factor,
            self.config.scale,
        );

        self.ratings.insert(winner.clone(), rating_winner + moved);
        self.ratings.insert(loser.clone(), rating_loser - moved);

        debug!(%winner, %loser, score, stake = moved, "rating updated");
        moved
    }

    /// Fold a finished game into the ratings.
    #[instrument(skip(self, state), fields(players = state.player_count()))]
    pub fn record_game(&mut self, state: &GameState) {
        if !state.is_done() {
            warn!("recording a game that has not finished");
        }

        let player_count = state.player_count();
        if player_count == 0 {
            return;
        }

        let share = 1.0 / player_count as f64;
        for player in state.all_players() {
            *self.wins.entry(player.clone()).or_insert(0.0) += share;
            self.total_games += 1;
        }

        let dead: Vec<PlayerId> = state.dead_players().iter().cloned().collect();
        let survivors: Vec<PlayerId> = state.players().iter().cloned().collect();

        for pair in dead.windows(2) {
            self.update_rating(&pair[1], &pair[0], WIN);
        }

        if let Some(last_dead) = dead.last() {
            let survivor = self.rng.choose(&survivors).cloned();
            if let Some(survivor) = survivor {
                self.update_rating(&survivor, last_dead, WIN);
            }
        }

        for (i, a) in survivors.iter().enumerate() {
            for b in &survivors[i + 1..] {
                self.update_rating(a, b, DRAW);
            }
        }

        info!(
            dead = dead.len(),
            survivors = survivors.len(),
            total_games = self.total_games,
            "game recorded"
        );
    }
}

/// Serializable state of a `GameHistory`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub ratings: BTreeMap<PlayerId, f64>,
    pub wins: BTreeMap<PlayerId, f64>,
    pub total_games: u64,
    pub rng: GameRngState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameHistory {
        GameHistory::with_config(RatingConfig::default().with_seed(42))
    }

    #[test]
    fn test_default_rating() {
        let history = GameHistory::new();
        assert_eq!(history.current_rating(&PlayerId::new("nobody")), 500.0);
        assert_eq!(history.total_games(), 0);
        assert!(history.leaderboard().is_empty());
    }

    #[test]
    fn test_update_rating_even() {
        let mut history = seeded();
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");

        let moved = history.update_rating(&a, &b, WIN);

        assert_eq!(moved, 8.0);
        assert_eq!(history.current_rating(&a), 508.0);
        assert_eq!(history.current_rating(&b), 492.0);
    }

    #[test]
    fn test_update_rating_conserves_points() {
        let mut history = seeded();
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");
        history.adjust_rating(&a, 120.0);

        history.update_rating(&b, &a, WIN);
        history.update_rating(&a, &b, DRAW);

        let total = history.current_rating(&a) + history.current_rating(&b);
        assert!((total - 1120.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_between_equals_is_neutral() {
        let mut history = seeded();
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");

        assert_eq!(history.update_rating(&a, &b, DRAW), 0.0);
        assert_eq!(history.current_rating(&a), 500.0);
        assert_eq!(history.current_rating(&b), 500.0);
    }

    #[test]
    fn test_adjust_rating() {
        let mut history = seeded();
        let a = PlayerId::new("a");

        history.adjust_rating(&a, -25.0);
        assert_eq!(history.current_rating(&a), 475.0);
    }

    #[test]
    fn test_leaderboard_order() {
        let mut history = seeded();
        history.adjust_rating(&PlayerId::new("b"), 10.0);
        history.adjust_rating(&PlayerId::new("c"), 10.0);
        history.adjust_rating(&PlayerId::new("a"), -10.0);

        let names: Vec<_> = history
            .leaderboard()
            .into_iter()
            .map(|(p, _)| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_expected_score_uses_config_scale() {
        let history = GameHistory::with_config(RatingConfig {
            scale: 100.0,
            ..RatingConfig::default()
        });
        let e = history.expected_score(600.0, 500.0);
        assert!((e - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut history = seeded();
        history.update_rating(&PlayerId::new("a"), &PlayerId::new("b"), WIN);

        let snapshot = history.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: RatingSnapshot = serde_json::from_str(&json).unwrap();
        let restored = GameHistory::restore(RatingConfig::default(), &parsed);

        assert_eq!(restored.current_rating(&PlayerId::new("a")), 508.0);
        assert_eq!(restored.snapshot(), snapshot);
    }
}
