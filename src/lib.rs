//! Solve Kakuro puzzles
//!
//! A Kakuro puzzle is a rectangular grid of blocked and open cells. The open
//! cells form contiguous horizontal and vertical runs, each carrying a target
//! sum. A solution assigns every open cell a digit 1-9 so that the digits of
//! every run are distinct and sum to the run's target.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod puzzle;
pub mod solve;
