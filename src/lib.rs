//! Ultimate Tic-Tac-Toe engine and search agents
//!
//! This crate provides:
//! - A nested-board state machine: nine 3x3 sub-boards arranged 3x3,
//!   with the active-sub-board constraint, two-level win/tie detection,
//!   and snapshot/restore support for search
//! - A fixed-depth minimax agent with a static positional heuristic
//! - A time-budgeted Monte Carlo (UCB1) agent with flat per-ply
//!   move statistics
//! - A match arena and a small CLI driver for playing and comparing

pub mod agents;
pub mod arena;
pub mod cli;
pub mod error;
pub mod game;
pub mod types;

pub use agents::{Agent, MctsAgent, MctsConfig, MinimaxAgent, MinimaxConfig, RandomAgent};
pub use error::{Error, Result};
pub use game::{Cell, MetaBoard, MoveOutcome, Side, Status, SubBoard};
pub use types::{Coord, Square};
