//! Analysis module for replication outcome classification.
//!
//! This module implements the classification pipeline:
//!
//! 1. **Sign convention** ([`sign`]): canonical frame with a non-negative original
//! 2. **Effect-size conversion** ([`convert`]): t-statistics and correlation space
//! 3. **Repeated significance** ([`significance`]): gated and lenient strategies
//! 4. **Interval consistency** ([`interval`]): original-in-CI and replication-in-CI

mod convert;
mod interval;
mod sign;
mod significance;

pub use convert::{t_statistic, to_correlation, TStatistic};
pub use interval::{original_in_replication_ci, replication_in_original_ci};
pub use sign::{same_direction, sign_convention};
pub use significance::{classify_gated, classify_lenient};

use tracing::debug;

use crate::config::{ClassificationMethod, Config, SignificanceVariant};
use crate::result::OutcomeResult;
use crate::types::ReplicationRecord;

/// Classify one record with the method and thresholds in `config`.
///
/// Never fails: every unmet precondition yields `Outcome::Inconclusive`.
/// Records with a zero sample size are Inconclusive under every method.
pub fn classify_record(record: &ReplicationRecord, config: &Config) -> OutcomeResult {
    if !record.has_sample_sizes() {
        debug!(
            original_n = record.original_n,
            replication_n = record.replication_n,
            reason = "missing sample size",
            "record inconclusive"
        );
        return OutcomeResult::inconclusive(config.method);
    }

    match config.method {
        ClassificationMethod::RepeatedSignificance => {
            let original = record.original();
            let replication = record.replication();
            match config.significance_variant {
                SignificanceVariant::Gated => classify_gated(&original, &replication, config.alpha),
                SignificanceVariant::Lenient => {
                    classify_lenient(&original, &replication, config.alpha)
                }
            }
        }
        ClassificationMethod::OriginalInReplicationCI => {
            original_in_replication_ci(record, config.z_critical)
        }
        ClassificationMethod::ReplicationInOriginalCI => {
            replication_in_original_ci(record, config.z_critical)
        }
    }
}
