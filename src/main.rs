use std::{env, fs, time::Instant};

use bingo::{find_first_winner, find_last_winner, parse_input, BingoError, Puzzle, WinRecord};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BingoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    let program = reversed_args.pop().unwrap_or("bingo");
    let usage = || BingoError::Usage(format!("{} <part> <input file>", program));

    let part = reversed_args.pop().ok_or_else(usage)?;
    let input_file = reversed_args.pop().ok_or_else(usage)?;
    let content = fs::read_to_string(input_file)?;
    let puzzle = parse_input(&content)?;
    info!(
        calls = puzzle.calls.len(),
        boards = puzzle.boards.len(),
        "loaded {}",
        input_file
    );

    let result = match part {
        "1" => solve_part1(&puzzle)?,
        "2" => solve_part2(&puzzle)?,
        _ => return Err(usage()),
    };
    println!("{}", result);

    Ok(())
}

fn report(part: &str, record: &WinRecord, started: Instant) -> Result<u64, BingoError> {
    let score = record.score()?;
    info!(
        part,
        board = record.board_index,
        last_call = record.last_call,
        score,
        elapsed = ?started.elapsed(),
        "solved"
    );
    Ok(score)
}

fn solve_part1(puzzle: &Puzzle) -> Result<u64, BingoError> {
    let started = Instant::now();
    let record = find_first_winner(&puzzle.calls, &puzzle.boards)?;
    report("1", &record, started)
}

fn solve_part2(puzzle: &Puzzle) -> Result<u64, BingoError> {
    let started = Instant::now();
    let record = find_last_winner(&puzzle.calls, &puzzle.boards)?;
    report("2", &record, started)
}
