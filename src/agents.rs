//! Decision agents for the automated player.
//!
//! All agents consume the board's public contract only. An agent may
//! drive the live board through mutate/evaluate/restore cycles while it
//! thinks, but must hand it back observationally unchanged.

pub mod mcts;
pub mod minimax;
pub mod random;

use crate::{MetaBoard, Result, types::Coord};

pub use mcts::{MctsAgent, MctsConfig};
pub use minimax::{MinimaxAgent, MinimaxConfig};
pub use random::RandomAgent;

/// Unified interface for move-choosing strategies.
pub trait Agent: Send {
    /// Choose a move for the side whose turn it is on `board`.
    ///
    /// The agent may mutate the board while searching but must restore
    /// it before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMoves`] if the game is already over.
    fn choose_move(&mut self, board: &mut MetaBoard) -> Result<Coord>;

    /// The agent's name, used for identification in comparisons.
    fn name(&self) -> &str;
}
