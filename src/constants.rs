//! Numerical constants shared across the classification pipeline.

/// Lanczos `g` parameter paired with [`LANCZOS_COEFFICIENTS`].
pub const LANCZOS_G: f64 = 7.0;

/// 9-term Lanczos coefficient table for g = 7.
pub const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// ln(2π), precomputed for the Lanczos series.
pub const LN_2PI: f64 = 1.837_877_066_409_345_5;

/// Iteration cap for the incomplete beta continued fraction.
pub const BETA_CF_MAX_ITER: usize = 200;

/// Convergence tolerance for the incomplete beta continued fraction.
pub const BETA_CF_EPS: f64 = 1e-14;

/// Floor applied to Lentz denominators to avoid division blow-up.
pub const LENTZ_TINY: f64 = 1e-30;

/// Two-sided 95% normal critical value.
pub const Z_95: f64 = 1.96;

/// Conventional significance threshold.
pub const ALPHA_05: f64 = 0.05;

/// Correlations at or beyond this magnitude are treated as perfect.
pub const PERFECT_CORRELATION: f64 = 0.9999;

/// Largest |r| accepted by the t-statistic conversion.
pub const MAX_CONVERTIBLE_R: f64 = 0.999;
