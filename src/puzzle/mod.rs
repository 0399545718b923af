//! Kakuro puzzles

pub use self::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

pub mod error;
mod parse;

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::collections::{Coord, Grid};
use crate::puzzle::parse::parse_puzzle;

pub type Value = i32;

/// One sum-constrained run of open cells within a single row or column.
/// `start` and `end` are inclusive indices along the perpendicular axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSpec {
    pub start: usize,
    pub end: usize,
    pub sum: Value,
}

impl RunSpec {
    pub fn new(start: usize, end: usize, sum: Value) -> Self {
        Self { start, end, sum }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// The smallest and largest sums achievable with `len` distinct digits 1-9
    pub fn sum_bounds(len: usize) -> (Value, Value) {
        let len = len as Value;
        (len * (len + 1) / 2, (10 - len..=9).sum())
    }
}

/// A validated, unsolved Kakuro puzzle
pub struct Puzzle {
    grid: Grid<bool>,
    row_runs: Vec<Vec<RunSpec>>,
    col_runs: Vec<Vec<RunSpec>>,
}

impl Puzzle {
    /// Creates a puzzle from a grid of open flags and per-row / per-column
    /// run definitions. The runs of every row and column must exactly tile
    /// the open cells of that row or column, in order, with achievable sums.
    pub fn new(
        grid: Grid<bool>,
        row_runs: Vec<Vec<RunSpec>>,
        col_runs: Vec<Vec<RunSpec>>,
    ) -> Result<Self, InvalidPuzzle> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(InvalidPuzzle::new(
                "the grid must have at least one row and one column".into(),
            ));
        }
        if row_runs.len() != grid.height() {
            return Err(InvalidPuzzle::new(format!(
                "expected runs for {} rows, got {}",
                grid.height(),
                row_runs.len()
            )));
        }
        if col_runs.len() != grid.width() {
            return Err(InvalidPuzzle::new(format!(
                "expected runs for {} columns, got {}",
                grid.width(),
                col_runs.len()
            )));
        }
        for (row, runs) in row_runs.iter().enumerate() {
            let open = (0..grid.width())
                .map(|col| grid[Coord::new(col, row)])
                .collect_vec();
            check_runs(runs, open, &format!("row {}", row))?;
        }
        for (col, runs) in col_runs.iter().enumerate() {
            let open = (0..grid.height())
                .map(|row| grid[Coord::new(col, row)])
                .collect_vec();
            check_runs(runs, open, &format!("column {}", col))?;
        }
        Ok(Self {
            grid,
            row_runs,
            col_runs,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleFromFileError> {
        let buf = fs::read_to_string(path)?;
        let puzzle = Self::parse(&buf)?;
        Ok(puzzle)
    }

    pub fn parse(str: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(str)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.grid[coord]
    }

    /// Runs of each row, indexed by row
    pub fn row_runs(&self) -> &[Vec<RunSpec>] {
        &self.row_runs
    }

    /// Runs of each column, indexed by column
    pub fn col_runs(&self) -> &[Vec<RunSpec>] {
        &self.col_runs
    }
}

fn check_runs(runs: &[RunSpec], mut open: Vec<bool>, line: &str) -> Result<(), InvalidPuzzle> {
    for run in runs {
        if run.start > run.end || run.end >= open.len() {
            return Err(InvalidPuzzle::new(format!(
                "run {:?} in {} is out of bounds",
                run, line
            )));
        }
        let (min, max) = RunSpec::sum_bounds(run.len());
        if run.sum < min || run.sum > max {
            return Err(InvalidPuzzle::new(format!(
                "run {:?} in {} has an unachievable sum",
                run, line
            )));
        }
        for index in run.start..=run.end {
            if !open[index] {
                return Err(InvalidPuzzle::new(format!(
                    "run {:?} in {} overlaps another run or a blocked cell",
                    run, line
                )));
            }
            open[index] = false;
        }
    }
    if open.iter().any(|&o| o) {
        return Err(InvalidPuzzle::new(format!(
            "runs in {} do not cover every open cell",
            line
        )));
    }
    Ok(())
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for &open in row {
                write!(f, "{}", if open { '.' } else { 'X' })?;
            }
            writeln!(f)?;
        }
        for (row, runs) in self.row_runs.iter().enumerate() {
            for run in runs {
                writeln!(f, "row {} [{}-{}] sum {}", row, run.start, run.end, run.sum)?;
            }
        }
        for (col, runs) in self.col_runs.iter().enumerate() {
            for run in runs {
                writeln!(f, "col {} [{}-{}] sum {}", col, run.start, run.end, run.sum)?;
            }
        }
        Ok(())
    }
}
