//! Play command - interactive game against an agent (or hot-seat)

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use super::{AgentArgs, build_agent};
use crate::{
    Coord, MetaBoard, MoveOutcome, Side, Status,
    agents::Agent,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game interactively")]
pub struct PlayArgs {
    /// Opponent agent playing O (`minimax`, `mcts`, or `random`).
    /// Omit for hot-seat two-player play.
    #[arg(long)]
    pub opponent: Option<String>,

    #[command(flatten)]
    pub agent: AgentArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut opponent = args
        .opponent
        .as_deref()
        .map(|spec| build_agent(spec, &args.agent, 0))
        .transpose()?;

    println!(
        "Welcome to Ultimate Tic-Tac-Toe! X goes first. Denote moves as\n\
         row,col with the top left cell at 0,0.\n\n\
         Example move: 4,4"
    );

    let stdin = io::stdin();
    let mut board = MetaBoard::new();
    println!("{board}");

    while board.status() == Status::Ongoing {
        print!("Enter your move ({} to play): ", board.turn());
        io::stdout().flush().context("flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("read move input")?;
        if read == 0 {
            println!("\nInput closed, aborting game.");
            return Ok(());
        }

        let Some(coord) = parse_move(&line) else {
            println!("Illegal move. Try again.");
            continue;
        };
        if board.make_move(coord) == MoveOutcome::Illegal {
            println!("Illegal move. Try again.");
            continue;
        }
        println!("{board}");

        if let Some(agent) = opponent.as_deref_mut() {
            if board.status() == Status::Ongoing && board.turn() == Side::O {
                let reply = agent.choose_move(&mut board)?;
                println!("{} plays {}", agent.name(), reply);
                if board.make_move(reply) == MoveOutcome::Illegal {
                    anyhow::bail!("agent '{}' produced illegal move {reply}", agent.name());
                }
                println!("{board}");
            }
        }
    }

    match board.status() {
        Status::Won(Side::X) => println!("X wins!"),
        Status::Won(Side::O) => println!("O wins!"),
        _ => println!("Tie game!"),
    }
    Ok(())
}

/// Parse `row,col` move text. Anything malformed becomes `None`, which
/// the caller reports exactly like a coordinate the board rejected.
fn parse_move(text: &str) -> Option<Coord> {
    let mut parts = text.trim().split(',');
    let row = parts.next()?.trim().parse::<usize>().ok()?;
    let col = parts.next()?.trim().parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Coord::new(row, col).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move_accepts_row_col_pairs() {
        assert_eq!(parse_move("4,4"), Some(Coord::new(4, 4).unwrap()));
        assert_eq!(parse_move(" 0 , 8 \n"), Some(Coord::new(0, 8).unwrap()));
    }

    #[test]
    fn parse_move_rejects_malformed_and_out_of_range_input() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("4"), None);
        assert_eq!(parse_move("a,b"), None);
        assert_eq!(parse_move("4,4,4"), None);
        assert_eq!(parse_move("9,9"), None);
    }
}
