use std::collections::BTreeSet;

use crate::error::MalformedBoardError;

/// A bingo card, kept only as its winning lines.
///
/// The first `size` lines are the rows and the next `size` are the columns.
/// Every number on the card appears in exactly one row and one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    lines: Vec<BTreeSet<u64>>,
}

impl Board {
    pub fn new(grid: &[Vec<u64>]) -> Result<Self, MalformedBoardError> {
        let size = grid.len();
        if size == 0 {
            return Err(MalformedBoardError::Empty);
        }

        let mut seen = BTreeSet::new();
        for (row, values) in grid.iter().enumerate() {
            if values.len() != size {
                return Err(MalformedBoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for value in values.iter().copied() {
                if !seen.insert(value) {
                    return Err(MalformedBoardError::DuplicateValue(value));
                }
            }
        }

        let rows = grid.iter().map(|row| row.iter().copied().collect());
        let columns = (0..size).map(|col| grid.iter().map(|row| row[col]).collect());
        let lines: Vec<BTreeSet<u64>> = rows.chain(columns).collect();
        debug_assert_eq!(lines.len(), 2 * size);

        Ok(Self { size, lines })
    }

    /// Side length of the grid this board was built from.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn lines(&self) -> &[BTreeSet<u64>] {
        &self.lines
    }

    /// Every number on the board, recovered from the rows.
    pub fn numbers(&self) -> BTreeSet<u64> {
        self.lines[..self.size].iter().flatten().copied().collect()
    }

    /// A board has won once any of its lines is fully called.
    pub fn has_won(&self, called: &BTreeSet<u64>) -> bool {
        self.lines.iter().any(|line| line.is_subset(called))
    }
}

/// Side length shared by every board, or `None` when there are no boards.
pub fn common_size(boards: &[Board]) -> Result<Option<usize>, MalformedBoardError> {
    let Some(expected) = boards.first().map(Board::size) else {
        return Ok(None);
    };

    match boards
        .iter()
        .enumerate()
        .find(|(_, board)| board.size() != expected)
    {
        Some((index, board)) => Err(MalformedBoardError::MismatchedSize {
            board: index,
            expected,
            found: board.size(),
        }),
        None => Ok(Some(expected)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;

    use super::{common_size, Board};
    use crate::error::MalformedBoardError;

    fn grid() -> Vec<Vec<u64>> {
        vec![
            vec![22, 13, 17, 11, 0],
            vec![8, 2, 23, 4, 24],
            vec![21, 9, 14, 16, 7],
            vec![6, 10, 3, 18, 5],
            vec![1, 12, 20, 15, 19],
        ]
    }

    #[test]
    fn test_lines_cover_rows_and_columns() {
        let board = Board::new(&grid()).unwrap();

        assert_eq!(board.size(), 5);
        assert_eq!(board.lines().len(), 10);
        for line in board.lines() {
            assert_eq!(line.len(), 5);
        }

        let all: BTreeSet<u64> = grid().into_iter().flatten().collect();
        let union: BTreeSet<u64> = board.lines().iter().flatten().copied().collect();
        assert_eq!(all, union);
        assert_eq!(all, board.numbers());

        let first_column: BTreeSet<u64> = [22, 8, 21, 6, 1].into_iter().collect();
        assert!(board.lines().contains(&first_column));
    }

    #[test]
    fn test_every_number_in_one_row_and_one_column() {
        let board = Board::new(&grid()).unwrap();
        let (rows, columns) = board.lines().split_at(board.size());

        for number in board.numbers() {
            assert_eq!(rows.iter().filter(|line| line.contains(&number)).count(), 1);
            assert_eq!(
                columns
                    .iter()
                    .filter(|line| line.contains(&number))
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(&[vec![42]]).unwrap();
        assert_eq!(board.lines().len(), 2);
        assert!(board.has_won(&[42].into_iter().collect()));
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(Board::new(&[]), Err(MalformedBoardError::Empty));
    }

    #[test]
    fn test_rejects_non_square_grid() {
        let mut grid = grid();
        grid[3].pop();

        assert_eq!(
            Board::new(&grid),
            Err(MalformedBoardError::NotSquare {
                row: 3,
                len: 4,
                size: 5
            })
        );

        let tall = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        assert!(matches!(
            Board::new(&tall),
            Err(MalformedBoardError::NotSquare { row: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_values() {
        let mut grid = grid();
        grid[4][4] = 22;

        assert_eq!(
            Board::new(&grid),
            Err(MalformedBoardError::DuplicateValue(22))
        );
    }

    #[test]
    fn test_has_won_with_nothing_called() {
        let board = Board::new(&grid()).unwrap();
        assert!(!board.has_won(&BTreeSet::new()));
    }

    #[test]
    fn test_has_won_on_row_and_column() {
        let board = Board::new(&grid()).unwrap();

        let row: BTreeSet<u64> = [21, 9, 14, 16, 7].into_iter().collect();
        assert!(board.has_won(&row));

        let column: BTreeSet<u64> = [11, 4, 16, 18, 15].into_iter().collect();
        assert!(board.has_won(&column));

        let diagonal: BTreeSet<u64> = [22, 2, 14, 18, 19].into_iter().collect();
        assert!(!board.has_won(&diagonal));
    }

    #[test]
    fn test_has_won_is_monotonic() {
        let board = Board::new(&grid()).unwrap();
        let winning: BTreeSet<u64> = [13, 2, 9, 10, 12].into_iter().collect();
        assert!(board.has_won(&winning));

        for (extra, more) in (0u64..30).cartesian_product(30u64..60) {
            let mut called = winning.clone();
            called.insert(extra);
            called.insert(more);
            assert!(board.has_won(&called), "{:?}", called);
        }
    }

    #[test]
    fn test_common_size() {
        let small = Board::new(&[vec![1, 2], vec![3, 4]]).unwrap();
        let large = Board::new(&grid()).unwrap();

        assert_eq!(common_size(&[]), Ok(None));
        assert_eq!(common_size(&[small.clone(), small.clone()]), Ok(Some(2)));
        assert_eq!(
            common_size(&[small.clone(), small, large]),
            Err(MalformedBoardError::MismatchedSize {
                board: 2,
                expected: 2,
                found: 5
            })
        );
    }
}
