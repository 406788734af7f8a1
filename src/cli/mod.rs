//! Command Line Interface (CLI) layer for icongen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves the effective
//! `IconParams` and drives `icongen::generate_icons_with`.
//!
//! If you are embedding icongen into another application, prefer the
//! library API instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
