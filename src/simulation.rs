use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    board::{common_size, Board},
    error::{NoWinnerError, Result},
    score::score,
};

/// The board a simulation settled on, and the state of the game when it won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinRecord<'a> {
    pub board_index: usize,
    pub board: &'a Board,
    pub called: BTreeSet<u64>,
    pub last_call: u64,
}

impl<'a> WinRecord<'a> {
    pub fn score(&self) -> Result<u64> {
        score(self.board, &self.called, self.last_call)
    }
}

/// Called numbers for a single pass over the call sequence.
#[derive(Debug)]
struct CallState<'a> {
    calls: &'a [u64],
    drawn: usize,
    called: BTreeSet<u64>,
}

impl<'a> CallState<'a> {
    /// Seeds the game with the first `size` calls, since no line can complete sooner.
    fn start(calls: &'a [u64], boards: &[Board]) -> Result<Self> {
        let size = match common_size(boards)? {
            Some(size) if !calls.is_empty() => size,
            _ => return Err(no_winner(calls, boards).into()),
        };

        let drawn = size.min(calls.len());
        let called = calls[..drawn].iter().copied().collect();
        trace!(drawn, "seeded called numbers");

        Ok(Self {
            calls,
            drawn,
            called,
        })
    }

    fn last_call(&self) -> u64 {
        self.calls[self.drawn - 1]
    }

    /// Calls the next number. Returns false once the sequence is exhausted.
    fn draw_next(&mut self) -> bool {
        match self.calls.get(self.drawn) {
            Some(&call) => {
                self.drawn += 1;
                self.called.insert(call);
                trace!(call, drawn = self.drawn, "called number");
                true
            }
            None => false,
        }
    }

    fn into_record<'b>(self, board_index: usize, board: &'b Board) -> WinRecord<'b> {
        let last_call = self.last_call();
        WinRecord {
            board_index,
            board,
            called: self.called,
            last_call,
        }
    }
}

fn no_winner(calls: &[u64], boards: &[Board]) -> NoWinnerError {
    NoWinnerError {
        calls: calls.len(),
        boards: boards.len(),
    }
}

/// Finds the board that completes a line first.
///
/// When several boards complete a line on the same call, the one listed first wins.
pub fn find_first_winner<'a>(calls: &[u64], boards: &'a [Board]) -> Result<WinRecord<'a>> {
    let mut state = CallState::start(calls, boards)?;

    loop {
        if let Some(board_index) = boards
            .iter()
            .position(|board| board.has_won(&state.called))
        {
            debug!(
                board_index,
                last_call = state.last_call(),
                drawn = state.drawn,
                "first winner found"
            );
            return Ok(state.into_record(board_index, &boards[board_index]));
        }

        if !state.draw_next() {
            return Err(no_winner(calls, boards).into());
        }
    }
}

/// Finds the board that completes a line last.
///
/// Boards are dropped as soon as they win. If every board still in play wins on the
/// same call, the one listed last among them is reported.
pub fn find_last_winner<'a>(calls: &[u64], boards: &'a [Board]) -> Result<WinRecord<'a>> {
    let mut state = CallState::start(calls, boards)?;
    let mut active: Vec<usize> = (0..boards.len()).collect();

    while active.len() > 1 {
        let mut finished = Vec::new();
        active.retain(|&index| {
            let won = boards[index].has_won(&state.called);
            if won {
                finished.push(index);
            }
            !won
        });

        if !finished.is_empty() {
            debug!(
                ?finished,
                remaining = active.len(),
                last_call = state.last_call(),
                "boards eliminated"
            );
        }

        if active.is_empty() {
            if let Some(&board_index) = finished.last() {
                debug!(
                    board_index,
                    tied = finished.len(),
                    last_call = state.last_call(),
                    "last boards won together"
                );
                return Ok(state.into_record(board_index, &boards[board_index]));
            }
        }

        if active.len() > 1 && !state.draw_next() {
            return Err(no_winner(calls, boards).into());
        }
    }

    let [board_index] = active[..] else {
        unreachable!("{:?}", active);
    };
    let board = &boards[board_index];

    loop {
        if board.has_won(&state.called) {
            debug!(
                board_index,
                last_call = state.last_call(),
                drawn = state.drawn,
                "last winner found"
            );
            return Ok(state.into_record(board_index, board));
        }

        if !state.draw_next() {
            return Err(no_winner(calls, boards).into());
        }
    }
}
