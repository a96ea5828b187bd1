//! CLI-side error taxonomy: everything the collaborators (loader, config,
//! presenter) can fail with, plus core failures passed through.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] anomgen_core::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A bad row in the input series file.
    #[error("{}:{line}: {reason}", .path.display())]
    MalformedSeries {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A line in the properties file that is not `key = value`.
    #[error("config line {line}: {reason}")]
    MalformedConfig { line: usize, reason: String },

    /// A config key that is missing or holds an out-of-domain value.
    #[error("config `{key}`: {reason}")]
    Config { key: String, reason: String },

    #[error("failed to write output: {reason}")]
    Output { reason: String },
}

impl CliError {
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        CliError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub fn output(reason: impl ToString) -> Self {
        CliError::Output {
            reason: reason.to_string(),
        }
    }
}
