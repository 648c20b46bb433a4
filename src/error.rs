//! Error types for the edges of the crate.
//!
//! Classification itself never fails; these cover configuration, parsing of
//! upstream interval strings and report writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid classifier configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Significance threshold outside (0, 1).
    #[error("significance level must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
    /// Critical value not a finite positive number.
    #[error("critical value must be finite and positive, got {0}")]
    InvalidCriticalValue(f64),
}

/// Failure to parse a textual confidence interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntervalError {
    /// Nothing left after stripping brackets and whitespace.
    #[error("empty interval")]
    Empty,
    /// Not exactly two comma/semicolon separated bounds.
    #[error("expected 2 bounds, found {0}")]
    BoundCount(usize),
    /// A bound is not a finite number.
    #[error("invalid bound: {0:?}")]
    InvalidBound(String),
}

/// Failure to write a classification report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error at the report path.
    #[error("failed to write report to {path}")]
    Io {
        /// Path we attempted to write.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Report could not be serialized.
    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}
