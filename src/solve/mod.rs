//! The constraint-satisfaction engine: combination enumeration, constraint
//! propagation and heuristic backtracking search

pub use self::board::{Board, Snapshot};

pub(crate) use self::value_set::ValueSet;

mod board;
mod cell;
mod run;
mod value_set;

use thiserror::Error;

use crate::puzzle::Puzzle;

/// No digit or combination satisfies the current constraints. During search
/// this triggers an undo and the next candidate digit; at board construction
/// it means the puzzle is combinatorially infeasible before any search.
/// It is always recovered from, never fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("puzzle constraints cannot be satisfied")]
pub struct Unsatisfiable;

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    /// Runs the search to completion, recording every intermediate board.
    /// `Err(Unsatisfiable)` means some cell has no admissible digit before
    /// the search even starts; an unsolved `SolveResult` means the search
    /// proved that no solution exists.
    pub fn solve(&self) -> Result<SolveResult, Unsatisfiable> {
        let mut board = Board::new(self.puzzle)?;
        let mut steps = Vec::new();
        let solved = board.solve(|snapshot| steps.push(snapshot));
        if solved {
            info!("puzzle solved, {} steps recorded", steps.len());
        } else {
            info!("no solution exists, {} steps recorded", steps.len());
        }
        let solution = if solved { Some(board.snapshot()) } else { None };
        Ok(SolveResult { solution, steps })
    }
}

/// The outcome of a completed search, with the history of intermediate
/// boards gathered regardless of the result
pub struct SolveResult {
    solution: Option<Snapshot>,
    steps: Vec<Snapshot>,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<&Snapshot> {
        self.solution.as_ref()
    }

    /// One snapshot per recursive entry of the search, starting with the
    /// initial board
    pub fn steps(&self) -> &[Snapshot] {
        &self.steps
    }
}
