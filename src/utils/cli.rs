//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, clap::ValueEnum, Debug)]
pub enum Action {
    /// Dump the token stream, one token per line.
    Scan,
    /// Check the syntax and report every error found.
    Parse,
}

#[derive(Parser, Debug)]
pub struct Args {
    /// run the given stage
    #[clap(
        short,
        long,
        value_enum,
        default_value_t = Action::Parse,
        value_name = "stage"
    )]
    pub target: Action,

    /// write output to
    #[clap(short = 'o', long, value_name = "outname")]
    pub output: Option<PathBuf>,

    /// print debugging information
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// source file to check
    pub input: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
