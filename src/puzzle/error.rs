use std::io;

use thiserror::Error;

/// The puzzle definition breaks a structural rule, e.g. runs that do not
/// exactly tile the open cells of the grid
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid dimension: \"{0}\"")]
    InvalidDimension(String),
    #[error("invalid grid row: \"{0}\"")]
    InvalidGridRow(String),
    #[error("invalid run sum: \"{0}\"")]
    InvalidSum(String),
    #[error("unexpected token: \"{0}\"")]
    UnexpectedToken(String),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}
