use std::fs;
use std::path::PathBuf;

use itertools::Itertools;

use kakuro::collections::Coord;
use kakuro::puzzle::{Puzzle, RunSpec, Value};
use kakuro::solve::{PuzzleSolver, Snapshot, Unsatisfiable};

#[test]
fn solvable_puzzles() {
    for (name, puzzle) in puzzles_in("solvable") {
        let result = PuzzleSolver::new(&puzzle)
            .solve()
            .unwrap_or_else(|_| panic!("{} rejected at construction", name));
        let solution = result
            .solution()
            .unwrap_or_else(|| panic!("{} not solved", name));
        verify_solution(&name, &puzzle, solution);
        assert!(!result.steps().is_empty(), "{} recorded no steps", name);
    }
}

#[test]
fn unsolvable_puzzles() {
    for (name, puzzle) in puzzles_in("unsolvable") {
        let result = PuzzleSolver::new(&puzzle)
            .solve()
            .unwrap_or_else(|_| panic!("{} rejected at construction", name));
        assert!(!result.is_solved(), "{} unexpectedly solved", name);
        assert!(result.solution().is_none());
        assert!(!result.steps().is_empty(), "{} recorded no steps", name);
    }
}

#[test]
fn infeasible_puzzles() {
    for (name, puzzle) in puzzles_in("infeasible") {
        let result = PuzzleSolver::new(&puzzle).solve();
        assert!(
            matches!(result.map(drop), Err(Unsatisfiable)),
            "{} not rejected at construction",
            name
        );
    }
}

fn puzzles_in(dir: &str) -> Vec<(String, Puzzle)> {
    let path = [env!("CARGO_MANIFEST_DIR"), "res", "test", "puzzles", dir]
        .iter()
        .collect::<PathBuf>();
    let puzzles = fs::read_dir(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e))
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let puzzle = Puzzle::from_file(&path)
                .unwrap_or_else(|e| panic!("cannot load {}: {}", path.display(), e));
            (name, puzzle)
        })
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect_vec();
    assert!(!puzzles.is_empty(), "no puzzles in {}", path.display());
    puzzles
}

/// Checks a solution against the puzzle it came from: blocked cells stay
/// blocked, open cells hold digits, and every run is made of distinct
/// digits adding up to its sum.
fn verify_solution(name: &str, puzzle: &Puzzle, solution: &Snapshot) {
    assert_eq!(puzzle.width(), solution.width());
    assert_eq!(puzzle.height(), solution.height());
    for (coord, _) in solution.iter_coord() {
        if puzzle.is_open(coord) {
            assert!(
                matches!(solution[coord], '1'..='9'),
                "{}: open cell {:?} holds {:?}",
                name,
                coord,
                solution[coord]
            );
        } else {
            assert_eq!('X', solution[coord], "{}: blocked cell {:?}", name, coord);
        }
    }
    for (row, runs) in puzzle.row_runs().iter().enumerate() {
        for run in runs {
            let digits = (run.start..=run.end)
                .map(|col| digit_at(solution, Coord::new(col, row)))
                .collect_vec();
            verify_run(name, &format!("row {}", row), run, &digits);
        }
    }
    for (col, runs) in puzzle.col_runs().iter().enumerate() {
        for run in runs {
            let digits = (run.start..=run.end)
                .map(|row| digit_at(solution, Coord::new(col, row)))
                .collect_vec();
            verify_run(name, &format!("column {}", col), run, &digits);
        }
    }
}

fn verify_run(name: &str, line: &str, run: &RunSpec, digits: &[Value]) {
    assert_eq!(
        run.sum,
        digits.iter().sum::<Value>(),
        "{}: run {:?} in {} has the wrong sum",
        name,
        run,
        line
    );
    assert!(
        digits.iter().unique().count() == digits.len(),
        "{}: run {:?} in {} repeats a digit",
        name,
        run,
        line
    );
}

fn digit_at(solution: &Snapshot, coord: Coord) -> Value {
    solution[coord].to_digit(10).unwrap() as Value
}
