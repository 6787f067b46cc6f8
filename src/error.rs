use thiserror::Error;

/// Reasons a grid cannot be turned into a [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board row {row} has {len} numbers, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("board contains {0} more than once")]
    DuplicateValue(u64),

    #[error("board {board} is {found}x{found}, expected {expected}x{expected}")]
    MismatchedSize {
        board: usize,
        expected: usize,
        found: usize,
    },
}

/// The calls ran out before the simulation found the board it was looking for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no winning board after {calls} calls across {boards} boards")]
pub struct NoWinnerError {
    pub calls: usize,
    pub boards: usize,
}

#[derive(Debug, Error)]
pub enum BingoError {
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] MalformedBoardError),

    #[error(transparent)]
    NoWinner(#[from] NoWinnerError),

    #[error("score does not fit in 64 bits (last call {last_call})")]
    ScoreOverflow { last_call: u64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, BingoError>;
