//! Canonical sign frame for (original, replication) effect pairs.

use std::cmp::Ordering;

/// Flip a pair so the original effect is non-negative.
///
/// When the original is negative both values are negated, so the
/// replication's sign then says whether it agrees (positive) or disagrees
/// (negative) with the original's direction.
pub fn sign_convention(original: f64, replication: f64) -> (f64, f64) {
    if original < 0.0 {
        (-original, -replication)
    } else {
        (original, replication)
    }
}

/// Direction of an effect: -1, 0 or +1. NaN maps to 0.
pub(crate) fn direction(x: f64) -> i8 {
    match x.partial_cmp(&0.0) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        _ => 0,
    }
}

/// Both effects have the same direction (zero only agrees with zero).
pub fn same_direction(a: f64, b: f64) -> bool {
    direction(a) == direction(b)
}

/// The effects point strictly opposite ways.
pub(crate) fn opposite_direction(a: f64, b: f64) -> bool {
    direction(a) * direction(b) == -1
}
