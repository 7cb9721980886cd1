//! Game results and a driving loop for agent-controlled players.
//!
//! The engine itself never asks anyone for a move. `GameRunner` is a thin
//! loop that does: it looks up the active player's agent capability, hands
//! it an `AgentView`, and applies the returned move.

use derive_more::Display;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::IllegalMove;
use super::state::GameState;
use crate::core::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Last player standing.
    Winner(PlayerId),
    /// Draw countdown ran out.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }
}

/// Why a driven game stopped early.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum RunError {
    /// An agent returned a move the engine rejected.
    #[display("Agent move rejected: {_0}")]
    IllegalMove(IllegalMove),

    /// The active player has no move-selection capability.
    #[display("{_0} cannot pick moves")]
    NotAnAgent(PlayerId),

    /// The active player is not in the runner's roster.
    #[display("{_0} is not seated at this game")]
    UnknownPlayer(PlayerId),
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::IllegalMove(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IllegalMove> for RunError {
    fn from(err: IllegalMove) -> Self {
        RunError::IllegalMove(err)
    }
}

/// Final state of a driven game.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// State after the last applied move.
    pub state: GameState,
    /// Moves applied.
    pub turns: u32,
}

/// Plays games by consulting each active player's agent.
pub struct GameRunner<'p> {
    roster: FxHashMap<PlayerId, &'p dyn Player>,
    max_turns: Option<u32>,
}

impl<'p> GameRunner<'p> {
    /// Seat the given players. Later entries replace earlier ones with the same ID.
    pub fn new(players: impl IntoIterator<Item = &'p dyn Player>) -> Self {
        let roster = players
            .into_iter()
            .map(|player| (player.id().clone(), player))
            .collect();

        Self {
            roster,
            max_turns: None,
        }
    }

    /// Stop after `turns` moves even if the game is not done.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Ask the active player's agent for a move and apply it.
    pub fn step(&self, state: &GameState) -> Result<GameState, RunError> {
        let active = state.active_player().ok_or(IllegalMove::NoActivePlayer)?;

        let player = self
            .roster
            .get(active)
            .ok_or_else(|| RunError::UnknownPlayer(active.clone()))?;
        let agent = player
            .as_agent()
            .ok_or_else(|| RunError::NotAnAgent(active.clone()))?;

        let view = state.view_for(active.clone());
        let mv = agent.pick_move(&view);
        debug!(player = %active, %mv, "agent picked move");

        Ok(state.apply_move(mv)?)
    }

    /// Play from `state` until the game is done or the turn cap is hit.
    #[instrument(skip(self, state), fields(players = state.players().len()))]
    pub fn run(&self, state: GameState) -> Result<RunOutcome, RunError> {
        let mut state = state;
        let mut turns = 0;

        while !state.is_done() && self.max_turns.map_or(true, |max| turns < max) {
            state = self.step(&state)?;
            turns += 1;
        }

        info!(turns, result = ?state.result(), "game finished");
        Ok(RunOutcome { state, turns })
    }
}
