//! Student's t-distribution tail probabilities.

use crate::constants::PERFECT_CORRELATION;
use crate::statistics::beta::regularized_incomplete_beta;

/// Two-tailed p-value of a t-statistic with `df` degrees of freedom.
///
/// Uses the exact relation `P(|T| ≥ |t|) = I_x(df/2, 1/2)` with
/// `x = df / (df + t²)`.
///
/// Returns 1.0 when `t == 0`, when `t` is not finite, or when `df` is not a
/// finite positive number.
#[must_use]
pub fn p_value_from_t(t: f64, df: f64) -> f64 {
    let abs_t = t.abs();
    if abs_t == 0.0 {
        return 1.0;
    }
    if !abs_t.is_finite() || !df.is_finite() || df <= 0.0 {
        return 1.0;
    }

    let x = df / (df + abs_t * abs_t);
    regularized_incomplete_beta(x, df / 2.0, 0.5)
}

/// Two-tailed p-value for a Pearson correlation `r` observed on `n` pairs.
///
/// `t = r · sqrt((n − 2) / (1 − r²))` with `df = n − 2`.
///
/// Returns `None` when the inputs are non-finite or `n <= 2`. A correlation
/// at |r| ≥ 0.9999 (or with `1 − r² ≤ 1e-4`) is reported as `Some(0.0)`.
#[must_use]
pub fn p_value_from_r(r: f64, n: f64) -> Option<f64> {
    if !r.is_finite() || !n.is_finite() || n <= 2.0 {
        return None;
    }
    if r.abs() >= PERFECT_CORRELATION {
        return Some(0.0);
    }
    let denom = 1.0 - r * r;
    if denom <= 1e-4 {
        return Some(0.0);
    }

    let t = r * ((n - 2.0) / denom).sqrt();
    Some(p_value_from_t(t, n - 2.0))
}
