//! Error types for anomgen-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the core can raise. Both are fatal: the run aborts before any
/// series is generated.
#[derive(Debug, Error)]
pub enum Error {
    /// Input series too short to estimate weekly periodicity.
    #[error("insufficient data: {got} samples, need at least {min} (one week of hourly data)")]
    InsufficientData {
        /// Samples actually supplied.
        got: usize,
        /// Minimum required (one week of hourly samples).
        min: usize,
    },

    /// A generation parameter outside its documented domain.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Field that failed validation.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
