//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command and prints its report. The
//! audit itself lives in [`crate::core`].

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use std::env;

use anyhow::{Context, Result};

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let result = run::run(args, &cwd)?;
    report::print(&result, verbose);

    Ok(ExitStatus::Success)
}
