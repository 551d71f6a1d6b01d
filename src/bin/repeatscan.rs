//! repeatscan CLI - homopolymer and short tandem repeat finder
//!
//! Usage: `repeatscan REPS LENGTH INFILE`
//!
//! Prints `#repeat_length` / `#total_length` summary lines followed by one
//! tab-separated record per repeat (`chrom start end unit=UNIT`). Progress
//! is logged to stderr.

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::init_logging(args.log_level());

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
