//! Error types for the ultimate-ttt crate

use thiserror::Error;

/// Main error type for the ultimate-ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is out of bounds (rows and columns span 0-8)")]
    CoordOutOfBounds { row: usize, col: usize },

    #[error("square ({row}, {col}) is out of bounds (rows and columns span 0-2)")]
    SquareOutOfBounds { row: usize, col: usize },

    #[error("sub-board index {index} is out of bounds (must be 0-8)")]
    SubBoardOutOfBounds { index: usize },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("board layout too short: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position} in board layout")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown agent '{spec}'. Expected one of: {expected}")]
    UnknownAgent { spec: String, expected: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
