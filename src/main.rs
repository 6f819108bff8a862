use std::process::ExitCode;

use clap::Parser;
use locount::cli::{Arguments, ExitStatus};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter, e.g. `LOCOUNT_LOG=locount=trace`.
const LOG_ENV: &str = "LOCOUNT_LOG";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match locount::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
