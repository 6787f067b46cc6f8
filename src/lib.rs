//! Resolves a bingo tournament: which board wins first, which wins last, and how
//! each of them scores.
//!
//! Boards are stored as their rows and columns, so a win is a subset test against
//! the numbers called so far.

pub mod board;
pub mod error;
pub mod parser;
pub mod score;
pub mod simulation;

pub use board::Board;
pub use error::{BingoError, MalformedBoardError, NoWinnerError, Result};
pub use parser::{parse_input, Puzzle};
pub use score::score;
pub use simulation::{find_first_winner, find_last_winner, WinRecord};
