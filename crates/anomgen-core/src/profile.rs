//! Periodic baseline profiling.
//!
//! Buckets every input sample into an hour-of-day slot (`index % 24`) and an
//! hour-of-week slot (`index % 168`) and computes per-slot mean and standard
//! deviation. These tables are the "normal" reference the injector deviates
//! from, and their relative spread is what severity gets normalized against.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::Periodicity;
use crate::series::TimeSeries;

/// Slots in the daily table.
pub const DAY_HOURS: usize = 24;
/// Slots in the weekly table; also the minimum input length.
pub const WEEK_HOURS: usize = 168;

/// Aggregate statistics for one periodic slot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SlotStats {
    pub mean: f64,
    pub std_dev: f64,
    /// Input samples assigned to this slot.
    pub count: u32,
}

/// Per-slot baseline statistics at daily (24) and weekly (168) granularity.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeriodicProfile {
    daily: Vec<SlotStats>,
    weekly: Vec<SlotStats>,
}

/// Compute the periodic profile of an input series.
///
/// Fails when the series is shorter than one week of hourly samples: below
/// that, weekly slots would be empty and the estimate degenerate.
pub fn compute_profile(series: &TimeSeries) -> Result<PeriodicProfile> {
    if series.len() < WEEK_HOURS {
        return Err(Error::InsufficientData {
            got: series.len(),
            min: WEEK_HOURS,
        });
    }
    Ok(PeriodicProfile {
        daily: slot_stats(series.values(), DAY_HOURS),
        weekly: slot_stats(series.values(), WEEK_HOURS),
    })
}

/// Two-pass per-slot mean/std computation: means first, then squared
/// deviations against those means. Kept as two explicit passes (not a fused
/// online update) so the numbers match the plain textbook definition.
fn slot_stats(values: &[f64], period: usize) -> Vec<SlotStats> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0u32; period];
    for (i, v) in values.iter().enumerate() {
        sums[i % period] += v;
        counts[i % period] += 1;
    }
    let means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| sum / count as f64)
        .collect();

    let mut sq_dev = vec![0.0; period];
    for (i, v) in values.iter().enumerate() {
        let d = v - means[i % period];
        sq_dev[i % period] += d * d;
    }

    (0..period)
        .map(|slot| SlotStats {
            mean: means[slot],
            std_dev: (sq_dev[slot] / counts[slot] as f64).sqrt(),
            count: counts[slot],
        })
        .collect()
}

impl PeriodicProfile {
    pub fn daily(&self) -> &[SlotStats] {
        &self.daily
    }

    pub fn weekly(&self) -> &[SlotStats] {
        &self.weekly
    }

    /// The table for a chosen periodicity.
    pub fn table(&self, periodicity: Periodicity) -> &[SlotStats] {
        match periodicity {
            Periodicity::Daily => &self.daily,
            Periodicity::Weekly => &self.weekly,
        }
    }

    /// Average per-hour deviation of the daily table, as a percentage of its
    /// mean level: `100 * Σ std / Σ mean`.
    pub fn daily_relative_spread(&self) -> f64 {
        relative_spread(&self.daily)
    }

    /// Weekly counterpart of [`daily_relative_spread`](Self::daily_relative_spread).
    pub fn weekly_relative_spread(&self) -> f64 {
        relative_spread(&self.weekly)
    }

    /// Min and max of a table's mean column. Bounds the regime-change
    /// sampler's draws in synthetic mode.
    pub fn mean_range(&self, periodicity: Periodicity) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for slot in self.table(periodicity) {
            min = min.min(slot.mean);
            max = max.max(slot.mean);
        }
        (min, max)
    }
}

fn relative_spread(table: &[SlotStats]) -> f64 {
    let std_sum: f64 = table.iter().map(|s| s.std_dev).sum();
    let mean_sum: f64 = table.iter().map(|s| s.mean).sum();
    100.0 * std_sum / mean_sum
}
