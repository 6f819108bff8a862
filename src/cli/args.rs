//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `count`: Count words and estimate cost for localization files
//! - `qa`: Compare a source and a target string file for translation defects
//! - `init`: Initialize a locount configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Count(cmd)) => cmd.common.verbose,
            Some(Command::Qa(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory for exported spreadsheets (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Do not write a spreadsheet report
    #[arg(long)]
    pub no_export: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Terminal output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Args)]
pub struct CountCommand {
    /// Files or directories to count (default: current directory)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Rate in USD per word (overrides config file and language rates)
    #[arg(long, value_name = "USD")]
    pub rate: Option<f64>,

    /// Target language to quote; can be repeated. The first one prices each file.
    #[arg(long = "language", value_name = "LABEL")]
    pub languages: Vec<String>,

    /// Count raw words without stripping markup and placeholders
    #[arg(long)]
    pub no_strip: bool,

    /// Text column of spreadsheet and CSV files (exact name)
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,

    /// Keep zero-valued rows for files that yield no text
    #[arg(long)]
    pub keep_empty: bool,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QaCommand {
    /// Source language string file (JSON)
    pub source: PathBuf,

    /// Translated string file (JSON)
    pub target: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count words and estimate translation cost for localization files
    Count(CountCommand),
    /// Check a translation for placeholder, markup and length defects
    Qa(QaCommand),
    /// Initialize a new .locountrc.json configuration file
    Init,
}
