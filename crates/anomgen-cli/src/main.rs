//! anomgen - synthetic time-series anomaly generation
//!
//! Usage:
//!   anomgen generate --input ts.csv --config config.properties
//!   anomgen generate --input ts.csv --config config.properties --seed 42 --format json
//!   anomgen stats --input ts.csv

mod config;
mod error;
mod input;
mod report;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use anomgen_core::{compute_profile, generate};

use crate::error::{CliError, Result};
use crate::report::OutputFormat;

#[derive(Parser)]
#[command(name = "anomgen")]
#[command(about = "Synthetic time-series generation with controlled anomaly injection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an anomaly-injected output series from an input series
    Generate {
        /// Input time series (two-column `timestamp,value` CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Generation parameters (`KEY = value` properties file)
        #[arg(short, long)]
        config: PathBuf,

        /// RNG seed for reproducible output; drawn from entropy when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the series to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Profile an input series and print its baseline statistics
    Stats {
        /// Input time series (two-column `timestamp,value` CSV)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate {
            input,
            config,
            seed,
            output,
            format,
        } => run_generate(input, config, seed, output, format),
        Commands::Stats { input } => run_stats(input),
    };

    if let Err(err) = result {
        error!("{err}");
        process::exit(1);
    }
}

fn run_generate(
    input_path: PathBuf,
    config_path: PathBuf,
    seed: Option<u64>,
    output_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let series = input::load_series(&input_path)?;
    info!(samples = series.len(), "loaded input series");

    let profile = compute_profile(&series)?;
    let params = config::load_parameters(&config_path)?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, "seeded generator");

    let output = generate(&series, &profile, &params, &mut rng);
    report::stats_banner(&profile);

    let timestamps = report::output_timestamps(&series, &params, output.len());
    let generation_report = report::GenerationReport {
        seed,
        parameters: &params,
        daily_relative_spread: profile.daily_relative_spread(),
        weekly_relative_spread: profile.weekly_relative_spread(),
        timestamps: &timestamps,
        values: &output.values,
        labels: &output.labels,
        windows: &output.windows,
    };

    match output_path {
        Some(path) => {
            let mut file = File::create(&path).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            report::render(&mut file, format, &generation_report)?;
            info!(path = %path.display(), "wrote output series");
        }
        None => {
            report::render(&mut io::stdout().lock(), format, &generation_report)?;
        }
    }

    report::summary(&generation_report);
    Ok(())
}

fn run_stats(input_path: PathBuf) -> Result<()> {
    let series = input::load_series(&input_path)?;
    info!(samples = series.len(), "loaded input series");
    let profile = compute_profile(&series)?;
    report::stats_banner(&profile);
    Ok(())
}
