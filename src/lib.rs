//! # replication-oracle
//!
//! Classify replication attempts against their original studies.
//!
//! Given an original study and a replication, each described by an effect
//! size, its type (Pearson r, Cohen's d, eta-squared) and a sample size, this
//! crate decides whether the replication is a:
//! - **Success**: the effect was reproduced
//! - **Failure**: the effect was not reproduced
//! - **Reversal**: a significant effect in the opposite direction
//! - **Inconclusive**: the data cannot settle the question
//!
//! and reports the p-values or confidence interval behind the decision.
//!
//! ## Methods
//!
//! - [`ClassificationMethod::RepeatedSignificance`]: both studies significant
//!   in the same direction. The default strategy requires a significant
//!   original; a lenient historical strategy is available through
//!   [`SignificanceVariant::Lenient`].
//! - [`ClassificationMethod::OriginalInReplicationCI`]: the original effect
//!   lies inside the replication's 95% confidence interval.
//! - [`ClassificationMethod::ReplicationInOriginalCI`]: the mirror image.
//!
//! Classification never fails. Records that cannot be assessed (tiny
//! samples, near-perfect correlations, missing intervals, non-finite input)
//! come back as `Inconclusive`.
//!
//! ## Quick Start
//!
//! ```
//! use replication_oracle::{classify, Outcome, ReplicationRecord};
//!
//! // Original r = 0.40 (n = 50), replication r = -0.30 (n = 60)
//! let record = ReplicationRecord::from_correlations(0.40, 50, -0.30, 60);
//! let result = classify(&record);
//!
//! assert_eq!(result.label, Outcome::Reversal);
//! assert!(result.p_value_replication.unwrap() < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod oracle;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod report;
pub mod statistics;

// Re-exports for public API
pub use config::{ClassificationMethod, Config, SignificanceVariant};
pub use constants::{ALPHA_05, Z_95};
pub use error::{ConfigError, ParseIntervalError, ReportError};
pub use oracle::ReplicationOracle;
pub use result::{Outcome, OutcomeResult, OutcomeSummary, ScatterPoint};
pub use types::{ConfidenceInterval, EffectSizeType, RecordSource, RecordSet, ReplicationRecord, Study};

/// Convenience function: classify one record with the default configuration.
///
/// Equivalent to `ReplicationOracle::new().classify(record)`, i.e. gated
/// repeated significance at α = 0.05.
pub fn classify(record: &ReplicationRecord) -> OutcomeResult {
    ReplicationOracle::new().classify(record)
}
