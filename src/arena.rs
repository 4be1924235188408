//! Head-to-head match runner for comparing agents.

use serde::{Deserialize, Serialize};

use crate::{
    Error, MetaBoard, Result, Side, Status,
    agents::Agent,
    game::MoveOutcome,
};

/// Play one game between two agents; `x` opens.
///
/// # Errors
///
/// Returns an error if an agent fails to produce a move, or produces one
/// the board rejects (both indicate an agent bug, not a user mistake).
pub fn play_game<'a>(x: &'a mut dyn Agent, o: &'a mut dyn Agent) -> Result<Status> {
    let mut board = MetaBoard::new();

    while board.status() == Status::Ongoing {
        let agent = match board.turn() {
            Side::X => &mut *x,
            Side::O => &mut *o,
        };
        let name = agent.name().to_string();
        let chosen = agent.choose_move(&mut board)?;
        if board.make_move(chosen) == MoveOutcome::Illegal {
            return Err(Error::InvalidConfiguration {
                message: format!("agent '{name}' produced illegal move {chosen}"),
            });
        }
    }

    Ok(board.status())
}

/// Tallied results of a series between two agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub first: String,
    pub second: String,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl MatchReport {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            games: 0,
            first_wins: 0,
            second_wins: 0,
            ties: 0,
        }
    }

    /// Record one finished game given which side the first agent played.
    pub fn record(&mut self, outcome: Status, first_played: Side) {
        self.games += 1;
        match outcome {
            Status::Won(winner) if winner == first_played => self.first_wins += 1,
            Status::Won(_) => self.second_wins += 1,
            Status::Tie => self.ties += 1,
            Status::Ongoing => {}
        }
    }
}

/// Run a series of games, alternating which agent opens as X.
///
/// `on_game` is invoked after every finished game (progress reporting).
///
/// # Errors
///
/// Propagates the first game error encountered.
pub fn run_series(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    games: usize,
    mut on_game: impl FnMut(usize),
) -> Result<MatchReport> {
    let mut report = MatchReport::new(first.name(), second.name());

    for game in 0..games {
        let first_plays_x = game % 2 == 0;
        let outcome = if first_plays_x {
            play_game(first, second)?
        } else {
            play_game(second, first)?
        };
        let first_side = if first_plays_x { Side::X } else { Side::O };
        report.record(outcome, first_side);
        on_game(game + 1);
    }

    Ok(report)
}
