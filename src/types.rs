//! Validated coordinate newtypes for the nested board.
//!
//! A [`Coord`] addresses one of the 81 cells of the full board in global
//! (row, col) form; a [`Square`] addresses one of the 9 cells of a single
//! sub-board. Both validate their bounds at construction, so out-of-range
//! positions never reach the game state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A global board coordinate: (row, col) with both components in 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a new global coordinate, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CoordOutOfBounds`] if either component is >= 9.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 9 && col < 9 {
            Ok(Coord { row, col })
        } else {
            Err(crate::Error::CoordOutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Split into the addressed sub-board index and the local square within it.
    ///
    /// The mapping is integer division/modulo by 3 in both dimensions and is
    /// deterministic: `Coord::from_parts(c.split().0, c.split().1) == c`.
    pub fn split(&self) -> (usize, Square) {
        let board = 3 * (self.row / 3) + self.col / 3;
        let square = Square {
            row: self.row % 3,
            col: self.col % 3,
        };
        (board, square)
    }

    /// Rebuild a global coordinate from a sub-board index and a local square.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SubBoardOutOfBounds`] if `board` is >= 9.
    pub fn from_parts(board: usize, square: Square) -> Result<Self, crate::Error> {
        if board >= 9 {
            return Err(crate::Error::SubBoardOutOfBounds { index: board });
        }
        Ok(Coord {
            row: 3 * (board / 3) + square.row,
            col: 3 * (board % 3) + square.col,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A local sub-board coordinate: (row, col) with both components in 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Create a new local square, validating it's within sub-board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOutOfBounds`] if either component is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Square { row, col })
        } else {
            Err(crate::Error::SquareOutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index 0-8, the form used for the active-set constraint.
    pub fn index(&self) -> usize {
        3 * self.row + self.col
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
