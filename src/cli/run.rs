use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// Relative paths given on the command line resolve against `cwd`.
pub fn run(Arguments { command }: Arguments, cwd: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(&cmd, cwd),
        Some(Command::Init) => init(cwd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
