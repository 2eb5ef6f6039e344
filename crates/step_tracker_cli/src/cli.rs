use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use step_tracker::{
    Config, PhysicalProfile, TrackerResult, compute_day_summary, try_day_summary,
    try_training_summary,
};

use crate::input::collect_records;

#[derive(Parser, Debug)]
#[command(
    name = "step-tracker",
    about = "Distance and calorie reports from step-count records",
    long_about = "Reads comma-separated activity records and prints distance, speed and \
                  calorie reports. Records come from --input, positional arguments, or stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Body weight in kg (defaults to STEP_TRACKER_WEIGHT_KG)
    #[arg(long, global = true)]
    pub weight: Option<f64>,

    /// Body height in m (defaults to STEP_TRACKER_HEIGHT_M)
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// File with one record per line, `-` for stdin
    #[arg(long, short = 'i', global = true)]
    pub input: Option<PathBuf>,

    /// Emit one JSON object per record
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Daily step logs: "<steps>,<duration>". Invalid records or a
    /// non-positive weight/height yield empty output unless --strict
    Day {
        records: Vec<String>,

        /// Report failing records on stderr and exit non-zero
        #[arg(long)]
        strict: bool,
    },
    /// Training sessions: "<steps>,<activity>,<duration>"
    Training { records: Vec<String> },
}

#[derive(Serialize)]
struct JsonLine<'a, T: Serialize> {
    record: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json<T: Serialize>(
    out: &mut impl Write,
    record: &str,
    result: TrackerResult<T>,
) -> anyhow::Result<()> {
    let line = match result {
        Ok(summary) => JsonLine {
            record,
            summary: Some(summary),
            error: None,
        },
        Err(e) => JsonLine {
            record,
            summary: None,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    Ok(())
}

/// Print one result; returns false when the record failed.
fn emit<T: Serialize + Display>(
    out: &mut impl Write,
    record: &str,
    result: TrackerResult<T>,
    json: bool,
) -> anyhow::Result<bool> {
    let ok = result.is_ok();
    if json {
        print_json(out, record, result)?;
    } else {
        match result {
            Ok(summary) => write!(out, "{summary}")?,
            Err(e) => eprintln!("error: {record}: {e}"),
        }
    }
    Ok(ok)
}

pub fn run(args: Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failed = match args.command {
        Command::Day { records, strict } => {
            // range checks are left to the per-record computation
            let (weight_kg, height_m) = config.measurements(args.weight, args.height)?;
            let records = collect_records(args.input.as_deref(), records)?;
            let mut failed = 0usize;
            for record in &records {
                if !strict && !args.json {
                    // legacy behaviour: failures only reach the log, output is empty
                    write!(out, "{}", compute_day_summary(record, weight_kg, height_m))?;
                    continue;
                }
                let result = try_day_summary(record, weight_kg, height_m);
                if !emit(&mut out, record, result, args.json)? && strict {
                    failed += 1;
                }
            }
            tracing::info!(total = records.len(), failed, "day records processed");
            failed
        }
        Command::Training { records } => {
            let PhysicalProfile {
                weight_kg,
                height_m,
            } = config.profile(args.weight, args.height)?;
            let records = collect_records(args.input.as_deref(), records)?;
            let mut failed = 0usize;
            for record in &records {
                let result = try_training_summary(record, weight_kg, height_m);
                if !emit(&mut out, record, result, args.json)? {
                    failed += 1;
                }
            }
            tracing::info!(total = records.len(), failed, "training records processed");
            failed
        }
    };
    out.flush()?;

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
