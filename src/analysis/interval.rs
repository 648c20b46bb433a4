//! Confidence-interval consistency classification.
//!
//! One study supplies a point estimate, the other supplies an interval:
//! the record is a Success when the point falls inside the interval.
//!
//! A CI reported by the source (raw units) is preferred and is compared
//! against the raw point estimate. Without one, a Fisher interval is built
//! from the normalized correlation and compared against the normalized point.

use tracing::{debug, trace};

use crate::analysis::convert::to_correlation;
use crate::config::ClassificationMethod;
use crate::result::{Outcome, OutcomeResult};
use crate::statistics::fisher_ci_with_z;
use crate::types::{ConfidenceInterval, ReplicationRecord, Study};

/// Does the original effect fall inside the replication's CI?
pub fn original_in_replication_ci(record: &ReplicationRecord, z_critical: f64) -> OutcomeResult {
    point_in_interval(
        &record.original(),
        &record.replication(),
        z_critical,
        ClassificationMethod::OriginalInReplicationCI,
    )
}

/// Does the replication effect fall inside the original's CI?
pub fn replication_in_original_ci(record: &ReplicationRecord, z_critical: f64) -> OutcomeResult {
    point_in_interval(
        &record.replication(),
        &record.original(),
        z_critical,
        ClassificationMethod::ReplicationInOriginalCI,
    )
}

fn point_in_interval(
    point: &Study,
    interval_owner: &Study,
    z_critical: f64,
    method: ClassificationMethod,
) -> OutcomeResult {
    let Some((value, ci)) = resolve_interval(point, interval_owner, z_critical) else {
        debug!(?method, reason = "no usable confidence interval", "record inconclusive");
        return OutcomeResult::inconclusive(method);
    };

    let label = if ci.contains(value) {
        Outcome::Success
    } else {
        Outcome::Failure
    };
    trace!(?method, value, %ci, %label, "interval check");

    OutcomeResult {
        label,
        confidence_interval: Some(ci),
        ..OutcomeResult::inconclusive(method)
    }
}

/// Pick the value/interval pair to compare, in raw units when possible.
fn resolve_interval(
    point: &Study,
    interval_owner: &Study,
    z_critical: f64,
) -> Option<(f64, ConfidenceInterval)> {
    if let Some(ci) = interval_owner.ci.filter(ConfidenceInterval::is_usable) {
        if point.effect_size.is_finite() {
            return Some((point.effect_size, ci));
        }
    }

    let point_r = to_correlation(point.effect_size, point.effect_type)?;
    let owner_r = to_correlation(interval_owner.effect_size, interval_owner.effect_type)?;
    let ci = fisher_ci_with_z(owner_r, f64::from(interval_owner.n), z_critical)?;
    Some((point_r, ci))
}
