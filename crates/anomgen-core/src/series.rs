//! Input time-series container.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An observed time series: unix-second timestamps and values, index-aligned.
///
/// The container itself only guarantees shape (equal lengths). The one-week
/// minimum length is enforced where it matters, by the profiler.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Construct a series from aligned timestamp/value columns.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(Error::invalid_parameter(
                "series",
                format!(
                    "timestamp/value columns are misaligned: {} timestamps, {} values",
                    timestamps.len(),
                    values.len()
                ),
            ));
        }
        Ok(Self { timestamps, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest observed value. Used by the regime-change
    /// sampler to bound its random draws.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}
