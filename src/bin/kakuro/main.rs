#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

mod options;

#[macro_use]
extern crate log;

use anyhow::Result;

use kakuro::puzzle::Puzzle;
use kakuro::solve::PuzzleSolver;

use crate::options::Options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let puzzle = Puzzle::from_file(options.input())?;
    info!("solving a {}x{} puzzle", puzzle.width(), puzzle.height());
    println!("{}", puzzle);
    let result = match PuzzleSolver::new(&puzzle).solve() {
        Ok(result) => result,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    if options.show_steps() {
        for (i, step) in result.steps().iter().enumerate() {
            println!("Step {}:", i + 1);
            println!("{}", step);
        }
    }
    match result.solution() {
        Some(solution) => {
            println!("Solution:");
            print!("{}", solution);
        }
        None => println!("No solution found ({} steps searched)", result.steps().len()),
    }
    Ok(())
}
