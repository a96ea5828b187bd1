//! Validated generation parameters.
//!
//! Mode, periodicity and anomaly archetype are tagged enums so each branch of
//! the injector stays independently testable; the knobs are validated once at
//! construction and the set is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::profile::{DAY_HOURS, WEEK_HOURS};

/// How the output series is produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Synthesize every point from the periodic baseline tables.
    SyntheticFromBaseline,
    /// Perturb the observed input values in place.
    PerturbedReal,
}

/// Which baseline table drives synthetic generation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Periodicity {
    Daily,
    Weekly,
}

impl Periodicity {
    /// Cycle length in hourly slots.
    pub fn period_hours(self) -> usize {
        match self {
            Periodicity::Daily => DAY_HOURS,
            Periodicity::Weekly => WEEK_HOURS,
        }
    }
}

/// Anomaly archetype injected into the output. Exactly one per run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Sparse independent per-point excursions.
    PointSpike,
    /// One gradual ramp away from the baseline.
    TrendShift,
    /// One window of regime change: random behaviour or near-flatline.
    RegimeChange,
}

impl AnomalyKind {
    pub fn label(self) -> &'static str {
        match self {
            AnomalyKind::PointSpike => "point_spike",
            AnomalyKind::TrendShift => "trend_shift",
            AnomalyKind::RegimeChange => "regime_change",
        }
    }
}

/// The validated, immutable parameter set for one generation run.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct GenerationParameters {
    output_mode: OutputMode,
    periodicity: Periodicity,
    num_weeks: u32,
    anomaly_kind: AnomalyKind,
    frequency: f64,
    severity: f64,
}

impl GenerationParameters {
    /// Validate every knob against its documented domain.
    ///
    /// `periodicity` is only consulted in synthetic mode but is always part
    /// of the set, so a parameter file is valid or invalid independently of
    /// the mode it selects.
    pub fn new(
        output_mode: OutputMode,
        periodicity: Periodicity,
        num_weeks: u32,
        anomaly_kind: AnomalyKind,
        frequency: f64,
        severity: f64,
    ) -> Result<Self> {
        if !(1..=52).contains(&num_weeks) {
            return Err(Error::invalid_parameter(
                "num_weeks",
                format!("{num_weeks} is outside 1..=52"),
            ));
        }
        validate_unit_knob("frequency", frequency)?;
        validate_unit_knob("severity", severity)?;
        Ok(Self {
            output_mode,
            periodicity,
            num_weeks,
            anomaly_kind,
            frequency,
            severity,
        })
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn num_weeks(&self) -> u32 {
        self.num_weeks
    }

    pub fn anomaly_kind(&self) -> AnomalyKind {
        self.anomaly_kind
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn severity(&self) -> f64 {
        self.severity
    }
}

fn validate_unit_knob(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_parameter(
            field,
            format!("{value} is outside [0.0, 1.0]"),
        ));
    }
    Ok(())
}
