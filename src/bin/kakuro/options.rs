use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    input: PathBuf,
    show_steps: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            input: matches.value_of("input").expect("input is required").into(),
            show_steps: matches.is_present("steps"),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn show_steps(&self) -> bool {
        self.show_steps
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Kakuro")
        .about("Solve Kakuro puzzles")
        .arg(
            Arg::with_name("input")
                .value_name("PUZZLE")
                .required(true)
                .help("puzzle file to solve"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the board after every step of the search"),
        )
}
