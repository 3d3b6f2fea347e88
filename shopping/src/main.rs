//! Shopping - Main Entry Point
//!
//! Predicts whether an online shopping session ends in a purchase with a
//! nearest-neighbor model, and reports accuracy split by class.
//!
//! ```text
//! CSV ──▶ load ──▶ split ──▶ fit ──▶ predict ──▶ evaluate ──▶ report
//! ```
//!
//! The report goes to stdout; logs and diagnostics go to stderr.

mod config;
mod constants;
mod error;
mod logic;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use constants::{APP_NAME, APP_VERSION};
use logic::report::Report;

/// Train a nearest-neighbor purchase classifier on shopping sessions and
/// report its sensitivity and specificity
#[derive(Parser, Debug)]
#[command(name = "shopping")]
#[command(version)]
struct Cli {
    /// CSV file of shopping sessions
    data: PathBuf,

    /// Seed for the train/test split (overrides SHOPPING_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Wrong argument count exits here with status 2, before any file is read
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()
        .context("failed to load configuration")?
        .with_seed(cli.seed);
    log::debug!("Configuration: {:?}", config);

    let report = logic::pipeline::run(&cli.data, &config)
        .with_context(|| format!("failed to evaluate {}", cli.data.display()))?;
    Ok(report)
}
