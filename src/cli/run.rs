//! Dispatch a parsed command to its handler.
//!
//! Each handler prints its own output and returns the process exit status.
use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{count::count, init::init, qa::qa},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Count(cmd)) => count(cmd),
        Some(Command::Qa(cmd)) => qa(cmd),
        Some(Command::Init) => {
            let current_dir =
                std::env::current_dir().context("Failed to read current directory")?;
            init(&current_dir)
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
