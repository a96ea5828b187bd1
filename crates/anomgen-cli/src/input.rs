//! Input series loading.
//!
//! Turns a two-column `timestamp,value` CSV into a [`TimeSeries`]. Strict
//! schema: every row must carry exactly two parsable numbers, and the first
//! bad row aborts the load with its line number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anomgen_core::TimeSeries;

use crate::error::{CliError, Result};

/// Load a time series from a CSV file.
pub fn load_series(path: &Path) -> Result<TimeSeries> {
    let file = File::open(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_series(file, path)
}

fn parse_series<R: Read>(reader: R, path: &Path) -> Result<TimeSeries> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let line = idx + 1;
        let record = record.map_err(|e| malformed(path, line, e.to_string()))?;
        if record.len() != 2 {
            return Err(malformed(
                path,
                line,
                format!("expected 2 columns (timestamp,value), found {}", record.len()),
            ));
        }
        // Timestamps may arrive in float notation; truncate to whole seconds.
        let timestamp = record[0]
            .parse::<f64>()
            .map_err(|_| malformed(path, line, format!("unparsable timestamp `{}`", &record[0])))?;
        let value = record[1]
            .parse::<f64>()
            .map_err(|_| malformed(path, line, format!("unparsable value `{}`", &record[1])))?;
        timestamps.push(timestamp as i64);
        values.push(value);
    }

    TimeSeries::new(timestamps, values).map_err(CliError::from)
}

fn malformed(path: &Path, line: usize, reason: String) -> CliError {
    CliError::MalformedSeries {
        path: path.to_path_buf(),
        line,
        reason,
    }
}
