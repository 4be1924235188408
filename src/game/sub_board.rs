//! A single 3x3 sub-board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    cell::{Cell, MoveOutcome, Side, Status},
    lines,
};
use crate::types::{Coord, Square};

/// One of the nine 3x3 boards making up the full game.
///
/// This type implements `Copy` for efficiency since it's only 10 bytes
/// (9 bytes for cells + 1 byte for the status enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    cells: [Cell; 9],
    status: Status,
}

/// Saved grid and status of a [`SubBoard`], for exact restore.
#[derive(Debug, Clone, Copy)]
pub struct SubBoardSnapshot {
    cells: [Cell; 9],
    status: Status,
}

impl SubBoard {
    /// Create a new empty sub-board.
    pub fn new() -> Self {
        SubBoard {
            cells: [Cell::Empty; 9],
            status: Status::Ongoing,
        }
    }

    /// Build a sub-board from raw cells, deriving its status.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let mut board = SubBoard {
            cells,
            status: Status::Ongoing,
        };
        board.update_status();
        board
    }

    /// Get the cell at a local square.
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Get the derived terminal status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Place a mark for `side` at `square`.
    ///
    /// An occupied cell or an already-terminal board yields
    /// [`MoveOutcome::Illegal`] and leaves the grid untouched. Otherwise the
    /// cell is set, the status recomputed, and the new status returned.
    pub fn place_mark(&mut self, square: Square, side: Side) -> MoveOutcome {
        let idx = square.index();
        if self.cells[idx] != Cell::Empty || self.status.is_terminal() {
            return MoveOutcome::Illegal;
        }

        self.cells[idx] = side.to_cell();
        self.update_status();
        MoveOutcome::Legal(self.status)
    }

    /// Empty-cell coordinates translated by the given row/column offsets.
    ///
    /// The meta-board passes its sub-board origin (multiples of 3) so the
    /// result is expressed in global coordinates. Empty if terminal.
    ///
    /// # Panics
    ///
    /// Panics if an offset pushes a coordinate past the 9x9 board.
    pub fn legal_moves(&self, row_offset: usize, col_offset: usize) -> Vec<Coord> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| {
                Coord::new(row_offset + idx / 3, col_offset + idx % 3)
                    .expect("sub-board origin keeps coordinates in range")
            })
            .collect()
    }

    /// Number of marks the given side holds on this board.
    pub fn mark_count(&self, side: Side) -> usize {
        let target = side.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Positional score in [0, 1]: 0 favors X, 1 favors O, 0.5 is neutral.
    ///
    /// Not authoritative: a leaf heuristic for truncated search only.
    pub fn heuristic(&self) -> f64 {
        let lean = lines::grid_lean(&self.cells);
        ((1.0 - lean / lines::MAX_LEAN) / 2.0).clamp(0.0, 1.0)
    }

    /// Capture the grid and status for a later [`restore`](Self::restore).
    pub fn snapshot(&self) -> SubBoardSnapshot {
        SubBoardSnapshot {
            cells: self.cells,
            status: self.status,
        }
    }

    /// Overwrite the grid and status from a snapshot. Restore is total:
    /// no trace of moves made after the snapshot survives.
    pub fn restore(&mut self, snapshot: &SubBoardSnapshot) {
        self.cells = snapshot.cells;
        self.status = snapshot.status;
    }

    /// Text for one row, in the form used by the full-board rendering.
    pub fn row_text(&self, row: usize) -> String {
        let mut text = String::new();
        for col in 0..3 {
            if col > 0 {
                text.push(' ');
            }
            text.push(self.cells[3 * row + col].to_char());
        }
        text
    }

    fn update_status(&mut self) {
        let mut codes = [0i8; 9];
        for (idx, cell) in self.cells.iter().enumerate() {
            codes[idx] = cell.value();
        }

        if let Some(winner) = lines::line_winner(&codes) {
            self.status = Status::Won(winner);
        } else if self.cells.iter().all(|&cell| cell != Cell::Empty) {
            self.status = Status::Tie;
        } else {
            self.status = Status::Ongoing;
        }
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row_text(row))?;
        }
        Ok(())
    }
}
