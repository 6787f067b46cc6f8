use nom::{
    character::complete::{char, line_ending, multispace0, multispace1, space0, space1, u64 as number},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, terminated, tuple},
    Finish, IResult,
};

use crate::{
    board::{common_size, Board},
    error::{BingoError, Result},
};

/// Everything the simulations need: the draw order and the boards in input order.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub calls: Vec<u64>,
    pub boards: Vec<Board>,
}

fn calls(input: &str) -> IResult<&str, Vec<u64>> {
    separated_list1(char(','), number)(input)
}

fn row(input: &str) -> IResult<&str, Vec<u64>> {
    delimited(space0, separated_list1(space1, number), space0)(input)
}

fn grid(input: &str) -> IResult<&str, Vec<Vec<u64>>> {
    separated_list1(line_ending, row)(input)
}

fn puzzle(input: &str) -> IResult<&str, (Vec<u64>, Vec<Vec<Vec<u64>>>)> {
    all_consuming(tuple((
        terminated(calls, multispace1),
        terminated(separated_list1(multispace1, grid), multispace0),
    )))(input)
}

fn describe_failure(input: &str, error: nom::error::Error<&str>) -> BingoError {
    let offset = input.len() - error.input.len();
    let line = input[..offset].matches('\n').count() + 1;
    let near = error.input.lines().next().unwrap_or_default();

    BingoError::Parse(format!(
        "{:?} failed on line {} near {:?}",
        error.code, line, near
    ))
}

/// Parses a comma-separated call line followed by blank-line-separated boards.
pub fn parse_input(input: &str) -> Result<Puzzle> {
    let (_, (calls, grids)) = puzzle(input)
        .finish()
        .map_err(|error| describe_failure(input, error))?;

    let boards = grids
        .iter()
        .map(|grid| Board::new(grid))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    common_size(&boards)?;

    Ok(Puzzle { calls, boards })
}
