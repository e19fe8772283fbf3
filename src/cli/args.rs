//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare the two locale files and audit translation calls in code
//! - `init`: Write a default `.localeauditrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Path overrides for the audit. Relative paths resolve against the
/// current working directory.
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// First locale file (overrides config file)
    #[arg(long, env = "LOCALE_AUDIT_LOCALE_A")]
    pub locale_a: Option<PathBuf>,

    /// Second locale file (overrides config file)
    #[arg(long, env = "LOCALE_AUDIT_LOCALE_B")]
    pub locale_b: Option<PathBuf>,

    /// Source directory to scan for translation calls (overrides config file)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Directory that reported file locations are relative to (overrides config file)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare locale files and find translation keys used in code but not defined
    Check(CheckCommand),
    /// Initialize a new .localeauditrc.json configuration file
    Init,
}
