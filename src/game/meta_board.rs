//! The full nested board: nine sub-boards plus game-level state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    cell::{Cell, MoveOutcome, Side, Status},
    lines,
    sub_board::SubBoard,
};
use crate::types::{Coord, Square};

/// The 3x3 arrangement of sub-boards and the overall game state.
///
/// Owns its nine sub-boards exclusively. Tracks whose turn it is, the
/// number of moves played, the set of sub-boards currently playable, and
/// the derived game status. Once the status leaves `Ongoing` the board is
/// effectively frozen: every further [`make_move`](Self::make_move)
/// returns [`MoveOutcome::Illegal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBoard {
    boards: [SubBoard; 9],
    turn: Side,
    /// Sub-board indices playable on the current move, ascending.
    /// A singleton when the opponent's last move pinned one ongoing
    /// board, otherwise every ongoing board; empty iff terminal.
    active: Vec<usize>,
    status: Status,
    move_number: u32,
}

/// Saved state of a [`MetaBoard`], for exact restore.
///
/// Covers the nine sub-boards plus turn, active set, status, and move
/// number, so a restore is observationally total.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    boards: [SubBoard; 9],
    turn: Side,
    active: Vec<usize>,
    status: Status,
    move_number: u32,
}

impl MetaBoard {
    /// Create a new empty board with X to move and every sub-board active.
    pub fn new() -> Self {
        Self::new_with_first(Side::X)
    }

    /// Create a new empty board with a chosen opening side.
    pub fn new_with_first(first: Side) -> Self {
        MetaBoard {
            boards: [SubBoard::new(); 9],
            turn: first,
            active: (0..9).collect(),
            status: Status::Ongoing,
            move_number: 0,
        }
    }

    /// Build a board from an 81-cell layout diagram.
    ///
    /// `layout` is the full board in global row-major order ('X', 'O',
    /// '.'; whitespace is ignored), `turn` the side to move, and `forced`
    /// an optional sub-board the previous move pinned. Sub-board and
    /// game statuses are recomputed from the cells, the move number is
    /// the mark count, and a forced sub-board that is already terminal
    /// falls back to the every-ongoing-board active set, mirroring the
    /// live update rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not hold exactly 81 valid
    /// cell characters, if the piece counts are impossible, or if they
    /// are inconsistent with `turn`.
    pub fn from_layout(
        layout: &str,
        turn: Side,
        forced: Option<usize>,
    ) -> Result<Self, crate::Error> {
        let chars: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 81 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 81,
                got: chars.len(),
            });
        }

        let mut grids = [[Cell::Empty; 9]; 9];
        let mut x_count = 0usize;
        let mut o_count = 0usize;
        for (position, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c)
                .ok_or(crate::Error::InvalidCellCharacter { character: c, position })?;
            match cell {
                Cell::X => x_count += 1,
                Cell::O => o_count += 1,
                Cell::Empty => {}
            }
            let (row, col) = (position / 9, position % 9);
            let board = 3 * (row / 3) + col / 3;
            grids[board][3 * (row % 3) + col % 3] = cell;
        }

        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }
        let turn_consistent = match turn {
            Side::X => x_count == o_count || o_count == x_count + 1,
            Side::O => x_count == o_count || x_count == o_count + 1,
        };
        if !turn_consistent {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={x_count}, O={o_count}) are inconsistent with {turn} to move"
                ),
            });
        }
        if let Some(index) = forced {
            if index >= 9 {
                return Err(crate::Error::SubBoardOutOfBounds { index });
            }
        }

        let boards = grids.map(SubBoard::from_cells);
        let mut board = MetaBoard {
            boards,
            turn,
            active: Vec::new(),
            status: Status::Ongoing,
            move_number: (x_count + o_count) as u32,
        };
        board.status = board.derive_status();
        if board.status == Status::Ongoing {
            match forced {
                Some(index) if !board.boards[index].status().is_terminal() => {
                    board.active.push(index);
                }
                _ => board.activate_all_ongoing(),
            }
        }
        Ok(board)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Sub-board indices playable on the current move, ascending.
    pub fn active_boards(&self) -> &[usize] {
        &self.active
    }

    /// All nine sub-boards, row-major.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// The sub-board at a given index (0-8, row-major).
    pub fn sub_board(&self, index: usize) -> Option<&SubBoard> {
        self.boards.get(index)
    }

    /// Make a move for the side whose turn it is.
    ///
    /// The coordinate is split into a sub-board index and a local square.
    /// Targeting a sub-board outside the active set, moving on a finished
    /// game, or hitting an occupied cell all yield
    /// [`MoveOutcome::Illegal`] with no state change. A successful move
    /// advances the move number, flips the turn, and recomputes the
    /// active set and status.
    pub fn make_move(&mut self, coord: Coord) -> MoveOutcome {
        let (board_idx, square) = coord.split();
        if self.status != Status::Ongoing || !self.active.contains(&board_idx) {
            return MoveOutcome::Illegal;
        }

        if self.boards[board_idx].place_mark(square, self.turn) == MoveOutcome::Illegal {
            return MoveOutcome::Illegal;
        }

        self.move_number += 1;
        self.update_state(square);
        MoveOutcome::Legal(self.status)
    }

    /// Every legal move, in active-set order then row-major within a
    /// sub-board. Empty iff the game is over. Agents break ties by this
    /// ordering, so it is part of the contract.
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        if self.status != Status::Ongoing {
            return moves;
        }
        for &idx in &self.active {
            moves.extend(self.boards[idx].legal_moves(3 * (idx / 3), 3 * (idx % 3)));
        }
        moves
    }

    /// Positional score in [0, 1]: 0 favors X, 1 favors O.
    ///
    /// Mean over the nine sub-boards, with decided boards pinned to the
    /// extremes and ties to the midpoint.
    pub fn heuristic(&self) -> f64 {
        let total: f64 = self
            .boards
            .iter()
            .map(|board| match board.status() {
                Status::Won(Side::X) => 0.0,
                Status::Won(Side::O) => 1.0,
                Status::Tie => 0.5,
                Status::Ongoing => board.heuristic(),
            })
            .sum();
        total / 9.0
    }

    /// Capture the full board state for a later [`restore`](Self::restore).
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            boards: self.boards,
            turn: self.turn,
            active: self.active.clone(),
            status: self.status,
            move_number: self.move_number,
        }
    }

    /// Overwrite the full board state from a snapshot.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.boards = snapshot.boards;
        self.turn = snapshot.turn;
        self.active.clone_from(&snapshot.active);
        self.status = snapshot.status;
        self.move_number = snapshot.move_number;
    }

    /// Recompute status, turn, and active set after an accepted move.
    ///
    /// `last_square` is the local square just played: its index names the
    /// sub-board the opponent is sent to.
    fn update_state(&mut self, last_square: Square) {
        self.turn = self.turn.opponent();
        self.active.clear();

        self.status = self.derive_status();
        if self.status != Status::Ongoing {
            return;
        }

        let target = last_square.index();
        if self.boards[target].status().is_terminal() {
            self.activate_all_ongoing();
        } else {
            self.active.push(target);
        }
    }

    /// Game status from the nine sub-board outcomes, by the same
    /// line-sum rule a sub-board applies to its cells.
    fn derive_status(&self) -> Status {
        let mut codes = [0i8; 9];
        for (idx, board) in self.boards.iter().enumerate() {
            codes[idx] = board.status().code();
        }

        if let Some(winner) = lines::line_winner(&codes) {
            Status::Won(winner)
        } else if self.boards.iter().all(|board| board.status().is_terminal()) {
            Status::Tie
        } else {
            Status::Ongoing
        }
    }

    fn activate_all_ongoing(&mut self) {
        for (idx, board) in self.boards.iter().enumerate() {
            if !board.status().is_terminal() {
                self.active.push(idx);
            }
        }
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for band in 0..3 {
            if band > 0 {
                writeln!(f, "-----------------------")?;
            }
            for row in 0..3 {
                writeln!(
                    f,
                    " {} | {} | {} ",
                    self.boards[3 * band].row_text(row),
                    self.boards[3 * band + 1].row_text(row),
                    self.boards[3 * band + 2].row_text(row),
                )?;
            }
        }
        Ok(())
    }
}
