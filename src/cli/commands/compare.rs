//! Compare command - run an agent-vs-agent series

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use super::{AgentArgs, build_agent};
use crate::{arena, cli::output};

#[derive(Parser, Debug)]
#[command(about = "Compare two agents head-to-head")]
pub struct CompareArgs {
    /// The two agents to pit against each other
    /// (`minimax`, `mcts`, or `random`)
    #[arg(required = true, num_args = 2)]
    pub agents: Vec<String>,

    /// Number of games in the series (openers alternate)
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Write the report as JSON to this path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub agent: AgentArgs,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let mut first = build_agent(&args.agents[0], &args.agent, 0)?;
    let mut second = build_agent(&args.agents[1], &args.agent, 1)?;

    println!(
        "Comparing {} vs {} over {} games",
        first.name(),
        second.name(),
        args.games
    );

    let progress = output::create_series_progress(args.games as u64);
    let report = arena::run_series(first.as_mut(), second.as_mut(), args.games, |done| {
        progress.set_position(done as u64);
    })?;
    progress.finish();

    output::print_report(&report);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write report to {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }
    Ok(())
}
