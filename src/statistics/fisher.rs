//! Fisher z-transformation confidence intervals for correlations.

use crate::constants::{PERFECT_CORRELATION, Z_95};
use crate::types::ConfidenceInterval;

/// Fisher r-to-z transform: `z = 0.5 · ln((1 + r) / (1 − r))`.
#[must_use]
pub fn fisher_z(r: f64) -> f64 {
    0.5 * ((1.0 + r) / (1.0 - r)).ln()
}

/// Inverse Fisher transform: `r = (e^{2z} − 1) / (e^{2z} + 1)`.
#[must_use]
pub fn inverse_fisher_z(z: f64) -> f64 {
    let e = (2.0 * z).exp();
    (e - 1.0) / (e + 1.0)
}

/// 95% confidence interval for a correlation `r` observed on `n` pairs.
///
/// See [`fisher_ci_with_z`] for the details and failure modes.
#[must_use]
pub fn fisher_ci(r: f64, n: f64) -> Option<ConfidenceInterval> {
    fisher_ci_with_z(r, n, Z_95)
}

/// Confidence interval for a correlation using an arbitrary normal critical value.
///
/// Bounds are `z ± z_crit / sqrt(n − 3)` in z-space, mapped back to r-space.
///
/// Returns `None` when `n <= 3`, when |r| ≥ 0.9999, when either input is not
/// finite, or when the transformed bounds are non-finite or out of order.
#[must_use]
pub fn fisher_ci_with_z(r: f64, n: f64, z_crit: f64) -> Option<ConfidenceInterval> {
    if !r.is_finite() || !n.is_finite() || n <= 3.0 {
        return None;
    }
    if r.abs() >= PERFECT_CORRELATION {
        return None;
    }

    let z = fisher_z(r);
    let se_z = 1.0 / (n - 3.0).sqrt();

    let lower = inverse_fisher_z(z - z_crit * se_z);
    let upper = inverse_fisher_z(z + z_crit * se_z);

    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        return None;
    }

    Some(ConfidenceInterval { lower, upper })
}
