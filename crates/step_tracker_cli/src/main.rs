//! `step-tracker`: print distance and calorie reports for activity records.
//!
//! ```bash
//! step-tracker --weight 70 --height 1.75 day "1000,3h00m10s"
//! step-tracker --weight 70 --height 1.75 training "3456,walking,3h00m"
//! step-tracker training --json --input sessions.txt
//! ```

mod cli;
mod input;

use std::process::ExitCode;

use clap::Parser;
use step_tracker::Config;

use crate::cli::Cli;

fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    let config = Config::from_env();

    let level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(level);
    tracing::debug!("step-tracker: log filter: {}", level);

    cli::run(args, &config)
}
