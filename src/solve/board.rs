use super::cell::Cell;
use super::run::Run;
use super::{Unsatisfiable, ValueSet};
use crate::collections::{AHashLinkedHashSet, Coord, Grid};
use crate::puzzle::{Puzzle, RunSpec, Value};

/// The board as character codes: the placed digit, `.` for an open unsolved
/// cell, `X` for a blocked cell
pub type Snapshot = Grid<char>;

/// The full grid of cells and the backtracking search over it. Runs and
/// per-row/per-column used-digit sets are arena-indexed so every cell on a
/// line shares the one instance the board owns.
pub struct Board {
    cells: Grid<Option<Cell>>,
    row_runs: Vec<Run>,
    col_runs: Vec<Run>,
    row_values: Vec<ValueSet>,
    col_values: Vec<ValueSet>,
    unsolved_count: usize,
    index: DomainIndex,
}

impl Board {
    /// Builds the board from a validated puzzle. `Err(Unsatisfiable)` means
    /// some cell has no admissible digit before any search, i.e. the runs
    /// are combinatorially infeasible.
    ///
    /// # Panics
    ///
    /// Panics if an open cell is not covered by both a row run and a column
    /// run. The puzzle validation layer rejects such input.
    pub fn new(puzzle: &Puzzle) -> Result<Self, Unsatisfiable> {
        let width = puzzle.width();
        let height = puzzle.height();
        let (row_runs, row_run_map) = build_runs(puzzle.row_runs(), width);
        let (col_runs, col_run_map) = build_runs(puzzle.col_runs(), height);
        if row_runs.iter().chain(&col_runs).any(Run::is_infeasible) {
            return Err(Unsatisfiable);
        }
        let mut board = Self {
            cells: Grid::with_dimensions(width, height, None),
            row_runs,
            col_runs,
            row_values: vec![ValueSet::new(); height],
            col_values: vec![ValueSet::new(); width],
            unsolved_count: 0,
            index: DomainIndex::new(),
        };
        for row in 0..height {
            for col in 0..width {
                let coord = Coord::new(col, row);
                if !puzzle.is_open(coord) {
                    continue;
                }
                let row_run = row_run_map[row][col]
                    .unwrap_or_else(|| panic!("no row run covers open cell {:?}", coord));
                let col_run = col_run_map[col][row]
                    .unwrap_or_else(|| panic!("no column run covers open cell {:?}", coord));
                let mut cell = Cell::new(coord, row_run, col_run);
                cell.recompute(
                    &board.row_runs[row_run],
                    &board.col_runs[col_run],
                    board.row_values[row],
                    board.col_values[col],
                )?;
                board.index.insert(cell.domain().len(), coord);
                board.unsolved_count += 1;
                board.cells[coord] = Some(cell);
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn is_solved(&self) -> bool {
        self.unsolved_count == 0
    }

    /// Depth-first backtracking search. The observer is invoked with a
    /// snapshot on every recursive entry, including the initial one, and
    /// runs to completion before the search continues.
    pub fn solve(&mut self, mut observer: impl FnMut(Snapshot)) -> bool {
        self.solve_next(&mut observer)
    }

    fn solve_next(&mut self, observer: &mut dyn FnMut(Snapshot)) -> bool {
        observer(self.snapshot());
        if self.unsolved_count == 0 {
            return true;
        }
        self.unsolved_count -= 1;
        let (coord, size) = self
            .index
            .pop_min()
            .expect("unsolved cells but an empty index");
        debug!("guessing at {:?} (domain size {})", coord, size);
        for value in 1..=9 {
            if !self.cell(coord).domain().contains(value) {
                continue;
            }
            if self.place(coord, value).is_err() {
                continue;
            }
            if self.propagate(coord).is_err() {
                debug!("{} at {:?} leaves a cell without digits", value, coord);
                self.undo(coord);
                continue;
            }
            if self.solve_next(observer) {
                return true;
            }
            self.undo(coord);
        }
        // neighbors still hold domains narrowed by the last failed guess
        let repaired = self.propagate(coord);
        debug_assert!(repaired.is_ok());
        self.unsolved_count += 1;
        self.index.insert(size, coord);
        false
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Grid::with_dimensions(self.width(), self.height(), 'X');
        for (coord, cell) in self.cells.iter_coord() {
            if let Some(cell) = cell {
                snapshot[coord] = match cell.value() {
                    Some(value) => (b'0' + value as u8) as char,
                    None => '.',
                };
            }
        }
        snapshot
    }

    fn cell(&self, coord: Coord) -> &Cell {
        match self.cells[coord].as_ref() {
            Some(cell) => cell,
            None => panic!("no cell at {:?}", coord),
        }
    }

    fn place(&mut self, coord: Coord, value: Value) -> Result<(), Unsatisfiable> {
        debug!("placing {} at {:?}", value, coord);
        let cell = match self.cells[coord].as_mut() {
            Some(cell) => cell,
            None => panic!("no cell at {:?}", coord),
        };
        let (row_run, col_run) = (cell.row_run(), cell.col_run());
        cell.place(
            value,
            &mut self.row_runs[row_run],
            &mut self.col_runs[col_run],
            &mut self.row_values[coord.row()],
            &mut self.col_values[coord.col()],
        )
    }

    fn undo(&mut self, coord: Coord) {
        debug!("undoing {:?}", coord);
        let cell = match self.cells[coord].as_mut() {
            Some(cell) => cell,
            None => panic!("no cell at {:?}", coord),
        };
        let (row_run, col_run) = (cell.row_run(), cell.col_run());
        cell.undo(
            &mut self.row_runs[row_run],
            &mut self.col_runs[col_run],
            &mut self.row_values[coord.row()],
            &mut self.col_values[coord.col()],
        );
    }

    /// Recomputes every open cell reachable from `coord` along its row and
    /// column, relocating each in the index; stops a direction at a blocked
    /// cell or the grid edge
    fn propagate(&mut self, coord: Coord) -> Result<(), Unsatisfiable> {
        for row in (0..coord.row()).rev() {
            if !self.recompute(Coord::new(coord.col(), row))? {
                break;
            }
        }
        for row in coord.row() + 1..self.height() {
            if !self.recompute(Coord::new(coord.col(), row))? {
                break;
            }
        }
        for col in (0..coord.col()).rev() {
            if !self.recompute(Coord::new(col, coord.row()))? {
                break;
            }
        }
        for col in coord.col() + 1..self.width() {
            if !self.recompute(Coord::new(col, coord.row()))? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `Ok(false)` when the position is blocked, ending the walk
    fn recompute(&mut self, coord: Coord) -> Result<bool, Unsatisfiable> {
        let cell = match self.cells[coord].as_mut() {
            Some(cell) => cell,
            None => return Ok(false),
        };
        let (row_run, col_run) = (cell.row_run(), cell.col_run());
        let sizes = cell.recompute(
            &self.row_runs[row_run],
            &self.col_runs[col_run],
            self.row_values[coord.row()],
            self.col_values[coord.col()],
        )?;
        if let Some((previous, current)) = sizes {
            self.index.relocate(coord, previous, current);
        }
        Ok(true)
    }
}

fn build_runs(specs: &[Vec<RunSpec>], axis_len: usize) -> (Vec<Run>, Vec<Vec<Option<usize>>>) {
    let mut runs = Vec::new();
    let mut map = vec![vec![None; axis_len]; specs.len()];
    for (line, line_specs) in specs.iter().enumerate() {
        for spec in line_specs {
            let id = runs.len();
            runs.push(Run::new(spec.sum, spec.len()));
            for index in spec.start..=spec.end {
                map[line][index] = Some(id);
            }
        }
    }
    (runs, map)
}

/// Index from domain size to the unsolved cells with that size, backing the
/// fail-first cell choice. Insertion order within a bucket makes pops
/// deterministic.
struct DomainIndex {
    buckets: Vec<AHashLinkedHashSet<Coord>>,
}

impl DomainIndex {
    fn new() -> Self {
        Self {
            buckets: (0..10).map(|_| AHashLinkedHashSet::default()).collect(),
        }
    }

    fn insert(&mut self, size: usize, coord: Coord) {
        let inserted = self.buckets[size].insert(coord);
        debug_assert!(inserted);
    }

    fn relocate(&mut self, coord: Coord, previous: usize, current: usize) {
        if previous == current {
            return;
        }
        let removed = self.buckets[previous].remove(&coord);
        debug_assert!(removed);
        self.insert(current, coord);
    }

    /// Pops a cell from the smallest nonempty bucket
    fn pop_min(&mut self) -> Option<(Coord, usize)> {
        self.buckets
            .iter_mut()
            .enumerate()
            .skip(1)
            .find_map(|(size, bucket)| bucket.pop_front().map(|coord| (coord, size)))
    }
}
