//! Presenter: renders the generated series and its ground truth.
//!
//! Three formats, mirroring what analysts feed into detector benchmarks:
//! `csv` (plain `timestamp,value` rows), `json` (the full report with
//! parameters, stats and ground truth) and `pretty` (human-readable lines
//! with anomaly markers). Progress and summaries go to stderr so data on
//! stdout stays pipeable.

use std::io::Write;

use chrono::DateTime;
use clap::ValueEnum;
use serde::Serialize;

use anomgen_core::{AnomalyWindow, GenerationParameters, OutputMode, PeriodicProfile, TimeSeries};

use crate::error::{CliError, Result};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Pretty,
}

/// Everything one generation run produced, borrowed for rendering.
#[derive(Serialize)]
pub struct GenerationReport<'a> {
    pub seed: u64,
    pub parameters: &'a GenerationParameters,
    pub daily_relative_spread: f64,
    pub weekly_relative_spread: f64,
    pub timestamps: &'a [i64],
    pub values: &'a [f64],
    pub labels: &'a [bool],
    pub windows: &'a [AnomalyWindow],
}

/// Output time axis. Real mode keeps the input timestamps; synthetic mode
/// extends an hourly grid anchored at the input's first timestamp.
pub fn output_timestamps(
    series: &TimeSeries,
    params: &GenerationParameters,
    len: usize,
) -> Vec<i64> {
    match params.output_mode() {
        OutputMode::PerturbedReal => series.timestamps()[..len].to_vec(),
        OutputMode::SyntheticFromBaseline => {
            let t0 = series.timestamps().first().copied().unwrap_or(0);
            (0..len as i64).map(|i| t0 + i * 3600).collect()
        }
    }
}

/// Profile statistics banner, printed before generation output.
pub fn stats_banner(profile: &PeriodicProfile) {
    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                  Input Series Baseline                       ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║ Daily avg per-hour deviation:  {:27.3}%  ║",
        profile.daily_relative_spread()
    );
    eprintln!(
        "║ Weekly avg per-hour deviation: {:27.3}%  ║",
        profile.weekly_relative_spread()
    );
    eprintln!("╚══════════════════════════════════════════════════════════════╝");
}

/// Render the report in the requested format.
pub fn render(writer: &mut dyn Write, format: OutputFormat, report: &GenerationReport) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for (ts, value) in report.timestamps.iter().zip(report.values) {
                csv_writer
                    .write_record([ts.to_string(), value.to_string()])
                    .map_err(CliError::output)?;
            }
            csv_writer.flush().map_err(CliError::output)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report).map_err(CliError::output)?;
            writeln!(writer).map_err(CliError::output)?;
        }
        OutputFormat::Pretty => {
            for i in 0..report.values.len() {
                let marker = if report.labels[i] { " [ANOMALY]" } else { "" };
                writeln!(
                    writer,
                    "{} {:14.4}{}",
                    render_timestamp(report.timestamps[i]),
                    report.values[i],
                    marker
                )
                .map_err(CliError::output)?;
            }
        }
    }
    Ok(())
}

/// Completion summary, printed to stderr after the data is written.
pub fn summary(report: &GenerationReport) {
    let total = report.values.len();
    let anomalous = report.labels.iter().filter(|&&l| l).count();
    let ratio = 100.0 * anomalous as f64 / total.max(1) as f64;

    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                   Generation Complete                        ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║ Seed:              {:41} ║", report.seed);
    eprintln!("║ Points:            {:41} ║", total);
    eprintln!("║ Anomalous points:  {:41} ║", anomalous);
    eprintln!("║ Anomaly ratio:     {:40.2}% ║", ratio);
    eprintln!("╚══════════════════════════════════════════════════════════════╝");
    for window in report.windows {
        eprintln!(
            "  window {} [{}..{}] ({})",
            window.kind.label(),
            window.start,
            window.end,
            window.id
        );
    }
    if let (Some(first), Some(last)) = (report.timestamps.first(), report.timestamps.last()) {
        eprintln!(
            "  spans {} .. {}",
            render_timestamp(*first),
            render_timestamp(*last)
        );
    }
}

fn render_timestamp(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomgen_core::{AnomalyKind, Periodicity};

    fn sample_params(mode: OutputMode) -> GenerationParameters {
        GenerationParameters::new(mode, Periodicity::Daily, 1, AnomalyKind::PointSpike, 0.0, 0.5)
            .unwrap()
    }

    fn sample_series() -> TimeSeries {
        let timestamps = (0..200).map(|i| 1_400_000_000 + i * 3600).collect();
        let values = (0..200).map(|i| i as f64).collect();
        TimeSeries::new(timestamps, values).unwrap()
    }

    #[test]
    fn real_axis_reuses_input_timestamps() {
        let series = sample_series();
        let axis = output_timestamps(&series, &sample_params(OutputMode::PerturbedReal), 168);
        assert_eq!(axis, &series.timestamps()[..168]);
    }

    #[test]
    fn synthetic_axis_extends_hourly_past_the_input() {
        let series = sample_series();
        let axis = output_timestamps(
            &series,
            &sample_params(OutputMode::SyntheticFromBaseline),
            336,
        );
        assert_eq!(axis.len(), 336);
        assert_eq!(axis[0], 1_400_000_000);
        assert_eq!(axis[335], 1_400_000_000 + 335 * 3600);
    }

    #[test]
    fn csv_render_emits_one_row_per_point() {
        let params = sample_params(OutputMode::PerturbedReal);
        let report = GenerationReport {
            seed: 1,
            parameters: &params,
            daily_relative_spread: 0.0,
            weekly_relative_spread: 0.0,
            timestamps: &[100, 200],
            values: &[1.5, 2.5],
            labels: &[false, true],
            windows: &[],
        };
        let mut buf = Vec::new();
        render(&mut buf, OutputFormat::Csv, &report).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "100,1.5\n200,2.5\n");
    }

    #[test]
    fn json_render_carries_ground_truth() {
        let params = sample_params(OutputMode::PerturbedReal);
        let report = GenerationReport {
            seed: 7,
            parameters: &params,
            daily_relative_spread: 1.0,
            weekly_relative_spread: 2.0,
            timestamps: &[100],
            values: &[1.5],
            labels: &[true],
            windows: &[],
        };
        let mut buf = Vec::new();
        render(&mut buf, OutputFormat::Json, &report).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["seed"], 7);
        assert_eq!(parsed["labels"][0], true);
        assert_eq!(parsed["parameters"]["output_mode"], "PerturbedReal");
    }
}
