//! Parse puzzles from text
//!
//! The format is whitespace-delimited: the grid height and width, then one
//! `0`/`1` string per row (`1` = open cell), then the sums of the row runs in
//! row-major scan order, then the sums of the column runs in column-major
//! scan order. Run extents are derived from the grid, so only sums are
//! spelled out.
//!
//! ```text
//! 3 3
//! 011
//! 111
//! 110
//! 3 6 9
//! 7 8 3
//! ```

use itertools::Itertools;

use crate::collections::{Coord, Grid};
use crate::puzzle::error::ParsePuzzleError;
use crate::puzzle::{Puzzle, RunSpec, Value};

/// parse a `Puzzle` from a string
pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut tokens = s.split_whitespace();
    let height = parse_dimension(tokens.next())?;
    let width = parse_dimension(tokens.next())?;
    let mut grid = Grid::with_dimensions(width, height, false);
    for row in 0..height {
        let token = tokens.next().ok_or(ParsePuzzleError::UnexpectedEnd)?;
        if token.len() != width || !token.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(ParsePuzzleError::InvalidGridRow(token.into()));
        }
        for (col, byte) in token.bytes().enumerate() {
            grid[Coord::new(col, row)] = byte == b'1';
        }
    }
    let mut row_runs = Vec::with_capacity(height);
    for row in 0..height {
        let open = (0..width).map(|col| grid[Coord::new(col, row)]).collect_vec();
        row_runs.push(read_runs(&open, &mut tokens)?);
    }
    let mut col_runs = Vec::with_capacity(width);
    for col in 0..width {
        let open = (0..height).map(|row| grid[Coord::new(col, row)]).collect_vec();
        col_runs.push(read_runs(&open, &mut tokens)?);
    }
    if let Some(token) = tokens.next() {
        return Err(ParsePuzzleError::UnexpectedToken(token.into()));
    }
    let puzzle = Puzzle::new(grid, row_runs, col_runs)?;
    Ok(puzzle)
}

fn parse_dimension(token: Option<&str>) -> Result<usize, ParsePuzzleError> {
    let token = token.ok_or(ParsePuzzleError::UnexpectedEnd)?;
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParsePuzzleError::InvalidDimension(token.into())),
    }
}

/// Pairs each maximal open segment of a line with the next sum token
fn read_runs<'a>(
    open: &[bool],
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Vec<RunSpec>, ParsePuzzleError> {
    let mut runs = Vec::new();
    for (start, end) in segments(open) {
        let token = tokens.next().ok_or(ParsePuzzleError::UnexpectedEnd)?;
        let sum = token
            .parse::<Value>()
            .map_err(|_| ParsePuzzleError::InvalidSum(token.into()))?;
        runs.push(RunSpec::new(start, end, sum));
    }
    Ok(runs)
}

/// Maximal contiguous stretches of open cells, as inclusive index pairs
fn segments(open: &[bool]) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut start = None;
    for (i, &o) in open.iter().enumerate() {
        match (o, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                segments.push((s, i - 1));
                start = None;
            }
            _ => (),
        }
    }
    if let Some(s) = start {
        segments.push((s, open.len() - 1));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::{parse_puzzle, segments};
    use crate::puzzle::error::ParsePuzzleError;
    use crate::puzzle::RunSpec;

    #[test]
    fn segments_of_line() {
        assert_eq!(vec![(0, 2)], segments(&[true, true, true]));
        assert_eq!(
            vec![(0, 0), (2, 3)],
            segments(&[true, false, true, true])
        );
        assert!(segments(&[false, false]).is_empty());
    }

    #[test]
    fn parse_valid() {
        let puzzle = parse_puzzle("3 3\n011\n111\n110\n3 6 9\n7 8 3\n").unwrap();
        assert_eq!(3, puzzle.width());
        assert_eq!(3, puzzle.height());
        assert_eq!(vec![RunSpec::new(1, 2, 3)], puzzle.row_runs()[0]);
        assert_eq!(vec![RunSpec::new(1, 2, 7)], puzzle.col_runs()[0]);
        assert_eq!(vec![RunSpec::new(0, 2, 8)], puzzle.col_runs()[1]);
    }

    #[test]
    fn parse_split_line() {
        // a run split by a blocked cell needs two sums
        let puzzle = parse_puzzle("1 3\n101\n1 2\n1\n3\n").unwrap();
        assert_eq!(
            vec![RunSpec::new(0, 0, 1), RunSpec::new(2, 2, 2)],
            puzzle.row_runs()[0]
        );
        assert!(puzzle.col_runs()[1].is_empty());
    }

    #[test]
    fn parse_bad_dimension() {
        assert_eq!(
            Err(ParsePuzzleError::InvalidDimension("0".into())),
            parse_puzzle("0 3").map(drop)
        );
        assert_eq!(
            Err(ParsePuzzleError::InvalidDimension("x".into())),
            parse_puzzle("2 x").map(drop)
        );
    }

    #[test]
    fn parse_bad_grid_row() {
        assert_eq!(
            Err(ParsePuzzleError::InvalidGridRow("12".into())),
            parse_puzzle("1 2\n12\n3\n1 2").map(drop)
        );
        assert_eq!(
            Err(ParsePuzzleError::InvalidGridRow("1".into())),
            parse_puzzle("1 2\n1\n3\n1 2").map(drop)
        );
    }

    #[test]
    fn parse_missing_sums() {
        assert_eq!(
            Err(ParsePuzzleError::UnexpectedEnd),
            parse_puzzle("1 2\n11\n3\n1").map(drop)
        );
    }

    #[test]
    fn parse_trailing_token() {
        assert_eq!(
            Err(ParsePuzzleError::UnexpectedToken("9".into())),
            parse_puzzle("1 2\n11\n3\n1 2 9").map(drop)
        );
    }

    #[test]
    fn parse_unachievable_sum() {
        let result = parse_puzzle("1 2\n11\n18\n1 2");
        assert!(matches!(
            result.map(drop),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }
}
