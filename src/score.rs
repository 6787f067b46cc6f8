use std::collections::BTreeSet;

use crate::{
    board::Board,
    error::{BingoError, Result},
};

/// Sum of the board's uncalled numbers, multiplied by the call that won it.
pub fn score(board: &Board, called: &BTreeSet<u64>, last_call: u64) -> Result<u64> {
    board
        .numbers()
        .difference(called)
        .try_fold(0u64, |sum, &number| sum.checked_add(number))
        .and_then(|uncalled_sum| uncalled_sum.checked_mul(last_call))
        .ok_or(BingoError::ScoreOverflow { last_call })
}
