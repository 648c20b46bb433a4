//! Repeated-significance classification.
//!
//! Two strategies are kept side by side:
//!
//! - **Gated**: the original must itself be significant, otherwise the
//!   criterion says nothing and the record is Inconclusive. A significant
//!   replication in the other direction is a Reversal.
//! - **Lenient**: direction heuristics are applied first and there is no
//!   original gate; reversals are folded into Failure.
//!
//! Gated is the default. Which one a front end shows is a product decision.

use tracing::{debug, trace};

use crate::analysis::convert::{t_statistic, to_correlation};
use crate::analysis::sign::{opposite_direction, same_direction};
use crate::config::ClassificationMethod;
use crate::result::{Outcome, OutcomeResult};
use crate::statistics::{p_value_from_r, p_value_from_t};
use crate::types::Study;

const METHOD: ClassificationMethod = ClassificationMethod::RepeatedSignificance;

/// Replications with |effect| above this are counted as a real opposite-direction effect.
const OPPOSITE_EFFECT_FLOOR: f64 = 0.01;

/// Effects below this magnitude count as null.
const NULL_EFFECT: f64 = 0.001;

/// Gated repeated-significance classification.
///
/// 1. Non-finite effects or either `n <= 2` → Inconclusive.
/// 2. Original p-value (on the normalized correlation) ≥ `alpha` → Inconclusive.
/// 3. Replication significant and same direction → Success.
/// 4. Replication significant and opposite direction → Reversal.
/// 5. Replication not significant → Failure.
pub fn classify_gated(original: &Study, replication: &Study, alpha: f64) -> OutcomeResult {
    if !original.effect_size.is_finite() || !replication.effect_size.is_finite() {
        debug!(reason = "non-finite effect size", "record inconclusive");
        return OutcomeResult::inconclusive(METHOD);
    }
    if original.n <= 2 || replication.n <= 2 {
        debug!(
            original_n = original.n,
            replication_n = replication.n,
            reason = "sample size too small",
            "record inconclusive"
        );
        return OutcomeResult::inconclusive(METHOD);
    }

    let (Some(r_orig), Some(r_rep)) = (
        to_correlation(original.effect_size, original.effect_type),
        to_correlation(replication.effect_size, replication.effect_type),
    ) else {
        debug!(reason = "effect size not convertible to r", "record inconclusive");
        return OutcomeResult::inconclusive(METHOD);
    };

    let p_orig = p_value_from_r(r_orig, f64::from(original.n));
    let mut result = OutcomeResult {
        p_value_original: p_orig,
        ..OutcomeResult::inconclusive(METHOD)
    };

    match p_orig {
        Some(p) if p < alpha => {}
        _ => {
            debug!(p_original = ?p_orig, alpha, reason = "original not significant", "record inconclusive");
            return result;
        }
    }

    let Some(p_rep) = p_value_from_r(r_rep, f64::from(replication.n)) else {
        debug!(reason = "replication p-value unavailable", "record inconclusive");
        return result;
    };
    result.p_value_replication = Some(p_rep);

    let significant = p_rep < alpha;
    result.label = match (significant, same_direction(r_orig, r_rep)) {
        (true, true) => Outcome::Success,
        (true, false) => Outcome::Reversal,
        (false, _) => Outcome::Failure,
    };

    trace!(r_orig, r_rep, p_rep, label = %result.label, "gated significance");
    result
}

/// Lenient repeated-significance classification.
///
/// 1. Non-finite effects → Inconclusive.
/// 2. Opposite direction with |replication| > 0.01 → Failure.
/// 3. |replication| < 0.001 → Inconclusive if the original is also null,
///    Failure otherwise.
/// 4. Replication t-statistic (type-specific) unavailable → Inconclusive.
/// 5. Significant in the same direction → Success, anything else → Failure.
///
/// A same-direction replication that misses `alpha` is a Failure here. Older
/// releases of this strategy reported it as Inconclusive.
///
/// Effect sizes are compared as reported; no original gate is applied.
pub fn classify_lenient(original: &Study, replication: &Study, alpha: f64) -> OutcomeResult {
    let orig = original.effect_size;
    let rep = replication.effect_size;

    if !orig.is_finite() || !rep.is_finite() {
        debug!(reason = "non-finite effect size", "record inconclusive");
        return OutcomeResult::inconclusive(METHOD);
    }

    let p_orig = t_statistic(orig, original.effect_type, original.n)
        .map(|stat| p_value_from_t(stat.t, stat.df));
    let mut result = OutcomeResult {
        p_value_original: p_orig,
        ..OutcomeResult::inconclusive(METHOD)
    };

    if opposite_direction(orig, rep) && rep.abs() > OPPOSITE_EFFECT_FLOOR {
        result.label = Outcome::Failure;
        return result;
    }

    if rep.abs() < NULL_EFFECT {
        if orig.abs() < NULL_EFFECT {
            debug!(reason = "both effects null", "record inconclusive");
        } else {
            result.label = Outcome::Failure;
        }
        return result;
    }

    let Some(stat) = t_statistic(rep, replication.effect_type, replication.n) else {
        debug!(
            effect_type = %replication.effect_type,
            replication_n = replication.n,
            reason = "replication t-statistic unavailable",
            "record inconclusive"
        );
        return result;
    };

    let p_rep = p_value_from_t(stat.t, stat.df);
    result.p_value_replication = Some(p_rep);
    result.label = if p_rep < alpha && same_direction(orig, rep) {
        Outcome::Success
    } else {
        Outcome::Failure
    };

    trace!(orig, rep, p_rep, label = %result.label, "lenient significance");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EffectSizeType;

    fn study(effect_size: f64, n: u32) -> Study {
        Study {
            effect_size,
            effect_type: EffectSizeType::R,
            n,
            ci: None,
        }
    }

    #[test]
    fn test_gated_success() {
        let result = classify_gated(&study(0.40, 50), &study(0.35, 80), 0.05);
        assert_eq!(result.label, Outcome::Success);
        let p_orig = result.p_value_original.unwrap();
        let p_rep = result.p_value_replication.unwrap();
        assert!(p_orig > 0.003 && p_orig < 0.005, "p_orig = {}", p_orig);
        assert!(p_rep > 0.001 && p_rep < 0.002, "p_rep = {}", p_rep);
    }

    #[test]
    fn test_gated_failure() {
        let result = classify_gated(&study(0.40, 50), &study(0.05, 200), 0.05);
        assert_eq!(result.label, Outcome::Failure);
        assert!(result.p_value_replication.unwrap() > 0.05);
    }

    #[test]
    fn test_gated_reversal() {
        let result = classify_gated(&study(0.40, 50), &study(-0.30, 60), 0.05);
        assert_eq!(result.label, Outcome::Reversal);
        assert!(result.p_value_replication.unwrap() < 0.05);
    }

    #[test]
    fn test_gated_non_significant_original() {
        for rep in [study(0.9, 1000), study(-0.6, 300), study(0.0, 5)] {
            let result = classify_gated(&study(0.05, 20), &rep, 0.05);
            assert_eq!(result.label, Outcome::Inconclusive);
            assert!(result.p_value_original.unwrap() >= 0.05);
            assert!(result.p_value_replication.is_none());
        }
    }

    #[test]
    fn test_gated_negative_original_success() {
        // Direction agreement works for negative pairs too.
        let result = classify_gated(&study(-0.40, 50), &study(-0.35, 80), 0.05);
        assert_eq!(result.label, Outcome::Success);
    }

    #[test]
    fn test_gated_guards() {
        assert_eq!(classify_gated(&study(0.4, 2), &study(0.3, 80), 0.05).label, Outcome::Inconclusive);
        assert_eq!(classify_gated(&study(0.4, 50), &study(0.3, 1), 0.05).label, Outcome::Inconclusive);
        assert_eq!(
            classify_gated(&study(f64::NAN, 50), &study(0.3, 80), 0.05).label,
            Outcome::Inconclusive
        );
        assert_eq!(
            classify_gated(&study(0.4, 50), &study(f64::INFINITY, 80), 0.05).label,
            Outcome::Inconclusive
        );
    }

    #[test]
    fn test_gated_converts_cohens_d() {
        // d = 0.8 (r ≈ 0.371) on n = 60 is significant; d = 0.7 replicates it.
        let orig = Study { effect_type: EffectSizeType::D, ..study(0.8, 60) };
        let rep = Study { effect_type: EffectSizeType::D, ..study(0.7, 120) };
        assert_eq!(classify_gated(&orig, &rep, 0.05).label, Outcome::Success);
    }

    #[test]
    fn test_lenient_opposite_direction_is_failure() {
        let result = classify_lenient(&study(0.40, 50), &study(-0.30, 60), 0.05);
        assert_eq!(result.label, Outcome::Failure);
    }

    #[test]
    fn test_lenient_null_effects() {
        let both_null = classify_lenient(&study(0.0005, 50), &study(0.0002, 60), 0.05);
        assert_eq!(both_null.label, Outcome::Inconclusive);

        let rep_null = classify_lenient(&study(0.4, 50), &study(0.0002, 60), 0.05);
        assert_eq!(rep_null.label, Outcome::Failure);
    }

    #[test]
    fn test_lenient_skips_original_gate() {
        // Gated would call this Inconclusive; lenient only looks at the replication.
        let result = classify_lenient(&study(0.05, 20), &study(0.35, 80), 0.05);
        assert_eq!(result.label, Outcome::Success);
    }

    #[test]
    fn test_lenient_non_significant_same_direction_is_failure() {
        // Not Inconclusive: a null replication counts against the original.
        let result = classify_lenient(&study(0.40, 50), &study(0.05, 200), 0.05);
        assert_eq!(result.label, Outcome::Failure);
        assert!(result.p_value_replication.unwrap() >= 0.05);
    }

    #[test]
    fn test_lenient_missing_statistic_is_inconclusive() {
        // |r| ≥ 0.999 cannot be converted
        let result = classify_lenient(&study(0.4, 50), &study(0.9995, 60), 0.05);
        assert_eq!(result.label, Outcome::Inconclusive);

        let tiny = classify_lenient(&study(0.4, 50), &study(0.3, 2), 0.05);
        assert_eq!(tiny.label, Outcome::Inconclusive);
    }
}
