//! Generation parameter loading.
//!
//! Parses a `KEY = value` properties file (`#` comments and blank lines
//! ignored) and validates every field against its domain before the core is
//! invoked. Keys:
//!
//! | key             | meaning                                           |
//! |-----------------|---------------------------------------------------|
//! | `OUTPUT_FORMAT` | 1 = synthesize from baseline, 0 = perturb real    |
//! | `S_TYPE`        | 0 = daily periodicity, 1 = weekly                 |
//! | `NUM_WEEKS`     | output length in weeks, 1..=52                    |
//! | `A_TYPE`        | 0 = point spike, 1 = trend shift, 2 = regime change |
//! | `FREQUENCY`     | anomaly density / window fraction, [0.0, 1.0]     |
//! | `SEVERITY`      | anomaly magnitude, [0.0, 1.0]                     |

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anomgen_core::{AnomalyKind, GenerationParameters, OutputMode, Periodicity};

use crate::error::{CliError, Result};

/// Load and validate generation parameters from a properties file.
pub fn load_parameters(path: &Path) -> Result<GenerationParameters> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_parameters(&text)
}

fn parse_parameters(text: &str) -> Result<GenerationParameters> {
    let map = parse_properties(text)?;

    let output_mode = match int_key(&map, "OUTPUT_FORMAT")? {
        1 => OutputMode::SyntheticFromBaseline,
        0 => OutputMode::PerturbedReal,
        other => {
            return Err(CliError::config(
                "OUTPUT_FORMAT",
                format!("{other} is not a mode (0 = perturbed real, 1 = synthetic)"),
            ));
        }
    };
    let periodicity = match int_key(&map, "S_TYPE")? {
        0 => Periodicity::Daily,
        1 => Periodicity::Weekly,
        other => {
            return Err(CliError::config(
                "S_TYPE",
                format!("{other} is not a periodicity (0 = daily, 1 = weekly)"),
            ));
        }
    };
    let anomaly_kind = match int_key(&map, "A_TYPE")? {
        0 => AnomalyKind::PointSpike,
        1 => AnomalyKind::TrendShift,
        2 => AnomalyKind::RegimeChange,
        other => {
            return Err(CliError::config(
                "A_TYPE",
                format!("{other} is not an anomaly type (0 = spike, 1 = trend, 2 = regime)"),
            ));
        }
    };
    let num_weeks = int_key(&map, "NUM_WEEKS")?;
    let num_weeks = u32::try_from(num_weeks)
        .map_err(|_| CliError::config("NUM_WEEKS", format!("{num_weeks} is outside 1..=52")))?;
    let frequency = float_key(&map, "FREQUENCY")?;
    let severity = float_key(&map, "SEVERITY")?;

    GenerationParameters::new(
        output_mode,
        periodicity,
        num_weeks,
        anomaly_kind,
        frequency,
        severity,
    )
    .map_err(CliError::from)
}

fn parse_properties(text: &str) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| CliError::MalformedConfig {
            line: idx + 1,
            reason: "expected `KEY = value`".to_string(),
        })?;
        map.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(map)
}

fn raw_key<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Result<&'a str> {
    map.get(key)
        .map(String::as_str)
        .ok_or_else(|| CliError::config(key, "missing"))
}

fn int_key(map: &BTreeMap<String, String>, key: &str) -> Result<i64> {
    let raw = raw_key(map, key)?;
    raw.parse()
        .map_err(|_| CliError::config(key, format!("`{raw}` is not an integer")))
}

fn float_key(map: &BTreeMap<String, String>, key: &str) -> Result<f64> {
    let raw = raw_key(map, key)?;
    raw.parse()
        .map_err(|_| CliError::config(key, format!("`{raw}` is not a number")))
}
