//! # anomgen-core - Synthetic Anomaly Generation Engine
//!
//! Statistical profiling and anomaly injection for time-series data.
//! Learns periodic baselines from a real input series, then generates an
//! output series with one controlled anomaly archetype injected — labeled
//! ground truth for benchmarking anomaly detectors. Generation only: no
//! detection logic lives here.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       anomgen-core                         │
//! │                                                            │
//! │  TimeSeries ──► PeriodicProfile ──┐                        │
//! │  (input)        (daily/weekly     │                        │
//! │                  mean + std)      ▼                        │
//! │                            ┌─────────────┐                 │
//! │  GenerationParameters ────►│  injector   │──► OutputSeries │
//! │  (mode, kind, knobs)       │  (+ rng)    │    (+ ground    │
//! │                            └─────────────┘      truth)     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Explicit randomness** - every draw comes from a caller-supplied
//!    `Rng`; a fixed seed reproduces a run exactly.
//! 2. **Validate at the boundary** - parameters are checked once at
//!    construction, the input length once by the profiler; the injector
//!    assumes both and stays branch-free of error handling.
//! 3. **Ground truth tracking** - every output point is labeled, and
//!    injected windows are reported with ids.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anomgen_core::{
//!     AnomalyKind, GenerationParameters, OutputMode, Periodicity, TimeSeries,
//!     compute_profile, generate,
//! };
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let series = TimeSeries::new(vec![0; 168], vec![1.0; 168]).unwrap();
//! let profile = compute_profile(&series).unwrap();
//! let params = GenerationParameters::new(
//!     OutputMode::SyntheticFromBaseline,
//!     Periodicity::Daily,
//!     1,
//!     AnomalyKind::PointSpike,
//!     0.1,
//!     0.5,
//! )
//! .unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let output = generate(&series, &profile, &params, &mut rng);
//! assert_eq!(output.len(), 168);
//! ```

pub mod error;
pub mod inject;
pub mod params;
pub mod profile;
pub mod series;

pub use error::{Error, Result};
pub use inject::{AnomalyWindow, OutputSeries, generate};
pub use params::{AnomalyKind, GenerationParameters, OutputMode, Periodicity};
pub use profile::{DAY_HOURS, PeriodicProfile, SlotStats, WEEK_HOURS, compute_profile};
pub use series::TimeSeries;
