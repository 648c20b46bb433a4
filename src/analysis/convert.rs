//! Effect-size conversion to t-statistics and to correlation space.
//!
//! Each declared effect-size type gets its own formula. Conversions that
//! cannot be carried out (too few observations, correlations too close to
//! ±1, non-finite input) yield `None`; callers treat that as Inconclusive.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CONVERTIBLE_R;
use crate::types::EffectSizeType;

/// A t-statistic with its degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TStatistic {
    /// The statistic.
    pub t: f64,
    /// Degrees of freedom.
    pub df: f64,
}

/// Convert a raw effect size into a t-statistic.
///
/// | type       | valid when                  | t                         | df    |
/// |------------|-----------------------------|---------------------------|-------|
/// | r          | n > 2, \|r\| < 0.999        | r·sqrt((n−2)/(1−r²))      | n − 2 |
/// | d          | n > 2                       | d·sqrt(n/2)               | n − 2 |
/// | eta-squared| n > 2, 0 < η² < 1           | r-formula on r = sqrt(η²) | n − 2 |
/// | unknown    | as r                        | as r                      | n − 2 |
///
/// The d formula assumes two groups of roughly equal size.
pub fn t_statistic(effect_size: f64, effect_type: EffectSizeType, n: u32) -> Option<TStatistic> {
    if !effect_size.is_finite() || n <= 2 {
        return None;
    }
    let n = f64::from(n);

    match effect_type {
        EffectSizeType::R | EffectSizeType::Unknown => t_from_r(effect_size, n),
        EffectSizeType::D => Some(TStatistic {
            t: effect_size * (n / 2.0).sqrt(),
            df: n - 2.0,
        }),
        EffectSizeType::EtaSquared => {
            if effect_size > 0.0 && effect_size < 1.0 {
                t_from_r(effect_size.sqrt(), n)
            } else {
                None
            }
        }
    }
}

fn t_from_r(r: f64, n: f64) -> Option<TStatistic> {
    if r.abs() >= MAX_CONVERTIBLE_R {
        return None;
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return None;
    }
    Some(TStatistic {
        t: r * ((n - 2.0) / denom).sqrt(),
        df: n - 2.0,
    })
}

/// Normalize a raw effect size to a correlation-like value in [-1, 1].
///
/// - r / unknown: passed through when |r| ≤ 1
/// - d: `d / sqrt(d² + 4)` (equal group sizes)
/// - eta-squared: `sqrt(η²)` for η² in [0, 1]; the result is never negative
pub fn to_correlation(effect_size: f64, effect_type: EffectSizeType) -> Option<f64> {
    if !effect_size.is_finite() {
        return None;
    }

    match effect_type {
        EffectSizeType::R | EffectSizeType::Unknown => {
            (effect_size.abs() <= 1.0).then_some(effect_size)
        }
        EffectSizeType::D => Some(effect_size / (effect_size * effect_size + 4.0).sqrt()),
        EffectSizeType::EtaSquared => {
            (0.0..=1.0).contains(&effect_size).then(|| effect_size.sqrt())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_formula() {
        let stat = t_statistic(0.40, EffectSizeType::R, 50).unwrap();
        assert_eq!(stat.df, 48.0);
        assert!((stat.t - 0.40 * (48.0_f64 / 0.84).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_r_rejects_near_unit_and_small_n() {
        assert!(t_statistic(0.999, EffectSizeType::R, 50).is_none());
        assert!(t_statistic(-0.9995, EffectSizeType::R, 50).is_none());
        assert!(t_statistic(0.3, EffectSizeType::R, 2).is_none());
        assert!(t_statistic(f64::NAN, EffectSizeType::R, 50).is_none());
    }

    #[test]
    fn test_d_formula() {
        let stat = t_statistic(0.5, EffectSizeType::D, 32).unwrap();
        assert!((stat.t - 2.0).abs() < 1e-12);
        assert_eq!(stat.df, 30.0);
        // d has no upper bound on magnitude
        assert!(t_statistic(3.0, EffectSizeType::D, 10).is_some());
    }

    #[test]
    fn test_eta_squared_goes_through_r() {
        let eta = t_statistic(0.16, EffectSizeType::EtaSquared, 50).unwrap();
        let r = t_statistic(0.40, EffectSizeType::R, 50).unwrap();
        assert!((eta.t - r.t).abs() < 1e-12);

        assert!(t_statistic(0.0, EffectSizeType::EtaSquared, 50).is_none());
        assert!(t_statistic(1.0, EffectSizeType::EtaSquared, 50).is_none());
        assert!(t_statistic(-0.1, EffectSizeType::EtaSquared, 50).is_none());
    }

    #[test]
    fn test_unknown_falls_back_to_r() {
        let unknown = t_statistic(0.25, EffectSizeType::Unknown, 40).unwrap();
        let r = t_statistic(0.25, EffectSizeType::R, 40).unwrap();
        assert_eq!(unknown, r);
    }

    #[test]
    fn test_to_correlation() {
        assert_eq!(to_correlation(-0.3, EffectSizeType::R), Some(-0.3));
        assert_eq!(to_correlation(1.2, EffectSizeType::R), None);
        assert_eq!(to_correlation(0.25, EffectSizeType::EtaSquared), Some(0.5));
        assert_eq!(to_correlation(1.5, EffectSizeType::EtaSquared), None);

        // d = 0.8 → r = 0.8 / sqrt(4.64) ≈ 0.371
        let r = to_correlation(0.8, EffectSizeType::D).unwrap();
        assert!((r - 0.371_390_676).abs() < 1e-6);
        let r = to_correlation(-0.8, EffectSizeType::D).unwrap();
        assert!(r < 0.0);
    }
}
