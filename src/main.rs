//! icongen CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run, and print a single
//! `Error: ...` line with a failing exit status when anything goes wrong.
//! For programmatic use, prefer the library API (`icongen::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
