//! CLI commands

pub mod compare;
pub mod play;

use std::time::Duration;

use crate::{
    Error, MctsAgent, MctsConfig, MinimaxAgent, MinimaxConfig, RandomAgent, Result,
    agents::Agent,
};

/// Shared agent tuning flags used by both commands.
#[derive(Debug, Clone, clap::Args)]
pub struct AgentArgs {
    /// Minimax search depth in plies
    #[arg(long, default_value_t = 4)]
    pub depth: usize,

    /// MCTS time budget per move, in milliseconds
    #[arg(long = "budget-ms", default_value_t = 1000)]
    pub budget_ms: u64,

    /// MCTS rollout depth cap (default: play rollouts to the end)
    #[arg(long = "rollout-depth")]
    pub rollout_depth: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Build an agent from its CLI name (`minimax`, `mcts`, or `random`).
///
/// `index` keeps seeded agents in the same run from mirroring each
/// other: each gets `seed + index`.
pub fn build_agent(spec: &str, args: &AgentArgs, index: u64) -> Result<Box<dyn Agent>> {
    match spec {
        "minimax" => Ok(Box::new(MinimaxAgent::new(
            MinimaxConfig::new().with_depth(args.depth),
        ))),
        "mcts" => Ok(Box::new(MctsAgent::new(
            MctsConfig::new()
                .with_time_budget(Duration::from_millis(args.budget_ms))
                .with_rollout_depth(args.rollout_depth),
        ))),
        "random" => Ok(Box::new(RandomAgent::new(
            args.seed.map(|seed| seed + index),
        ))),
        _ => Err(Error::UnknownAgent {
            spec: spec.to_string(),
            expected: "minimax, mcts, random".to_string(),
        }),
    }
}
