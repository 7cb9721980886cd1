//! Turn order, elimination, draws, and the agent-facing view.
//!
//! - `GameState`: immutable game snapshot and its single transition
//! - `AgentView`: read-only projection handed to agents
//! - `GameRunner`: loop that drives agent-controlled players
//! - `IllegalMove`: the one way a move can fail

pub mod engine;
pub mod error;
pub mod state;
pub mod view;

pub use engine::{GameResult, GameRunner, RunError, RunOutcome};
pub use error::IllegalMove;
pub use state::GameState;
pub use view::AgentView;
