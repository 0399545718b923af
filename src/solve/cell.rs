use std::mem;

use super::run::Run;
use super::{Unsatisfiable, ValueSet};
use crate::collections::Coord;
use crate::puzzle::Value;

/// The intersection of one row run and one column run. Holds its current
/// value or admissible-value domain, plus the combinations its placement
/// removed from each run so an undo can put them back.
#[derive(Clone)]
pub(crate) struct Cell {
    coord: Coord,
    row_run: usize,
    col_run: usize,
    value: Option<Value>,
    domain: ValueSet,
    removed_row: Vec<ValueSet>,
    removed_col: Vec<ValueSet>,
}

impl Cell {
    pub fn new(coord: Coord, row_run: usize, col_run: usize) -> Self {
        Self {
            coord,
            row_run,
            col_run,
            value: None,
            domain: ValueSet::new(),
            removed_row: Vec::new(),
            removed_col: Vec::new(),
        }
    }

    /// Index of the owning run in the board's row-run arena
    pub fn row_run(&self) -> usize {
        self.row_run
    }

    /// Index of the owning run in the board's column-run arena
    pub fn col_run(&self) -> usize {
        self.col_run
    }

    pub fn value(&self) -> Option<Value> {
        self.value
    }

    pub fn is_solved(&self) -> bool {
        self.value.is_some()
    }

    pub fn domain(&self) -> ValueSet {
        self.domain
    }

    /// Recomputes the admissible-value domain from the current run and
    /// used-digit state. Returns `Ok(None)` when the cell is already solved,
    /// otherwise the previous and new domain sizes so the board can relocate
    /// the cell in its index. An empty recomputed domain is `Unsatisfiable`.
    pub fn recompute(
        &mut self,
        row_run: &Run,
        col_run: &Run,
        row_values: ValueSet,
        col_values: ValueSet,
    ) -> Result<Option<(usize, usize)>, Unsatisfiable> {
        if self.is_solved() {
            return Ok(None);
        }
        let previous = self.domain.len();
        let mut domain = ValueSet::new();
        for value in 1..=9 {
            if row_values.contains(value) || col_values.contains(value) {
                continue;
            }
            if row_run.admits(value) && col_run.admits(value) {
                domain.insert(value);
            }
        }
        if domain.is_empty() {
            return Err(Unsatisfiable);
        }
        self.domain = domain;
        Ok(Some((previous, domain.len())))
    }

    /// Places `value`: marks the digit used in the row and column and narrows
    /// both runs, keeping the removed combinations for `undo`. The cell must
    /// be unsolved and `value` must be in its domain.
    pub fn place(
        &mut self,
        value: Value,
        row_run: &mut Run,
        col_run: &mut Run,
        row_values: &mut ValueSet,
        col_values: &mut ValueSet,
    ) -> Result<(), Unsatisfiable> {
        debug_assert!(!self.is_solved());
        debug_assert!(self.domain.contains(value));
        debug_assert!(self.removed_row.is_empty() && self.removed_col.is_empty());
        let removed_row = row_run.place(value)?;
        let removed_col = match col_run.place(value) {
            Ok(removed) => removed,
            Err(e) => {
                row_run.restore(removed_row);
                return Err(e);
            }
        };
        self.value = Some(value);
        row_values.insert(value);
        col_values.insert(value);
        self.removed_row = removed_row;
        self.removed_col = removed_col;
        Ok(())
    }

    /// Reverses the most recent `place`
    pub fn undo(
        &mut self,
        row_run: &mut Run,
        col_run: &mut Run,
        row_values: &mut ValueSet,
        col_values: &mut ValueSet,
    ) {
        let value = match self.value.take() {
            Some(value) => value,
            None => panic!("cell {:?} is not solved", self.coord),
        };
        row_values.remove(value);
        col_values.remove(value);
        row_run.restore(mem::take(&mut self.removed_row));
        col_run.restore(mem::take(&mut self.removed_col));
    }
}
