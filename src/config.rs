//! Configuration for replication classification.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{ALPHA_05, Z_95};
use crate::error::ConfigError;

/// Configuration options for `ReplicationOracle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Significance threshold for p-values (default: 0.05).
    pub alpha: f64,

    /// Normal critical value for computed confidence intervals (default: 1.96, i.e. 95%).
    pub z_critical: f64,

    /// Methodology used to label a record (default: `RepeatedSignificance`).
    pub method: ClassificationMethod,

    /// Which significance strategy `RepeatedSignificance` runs (default: `Gated`).
    pub significance_variant: SignificanceVariant,
}

/// How a replication is judged against its original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Both studies significant, in the same direction.
    #[default]
    RepeatedSignificance,
    /// Original effect lies inside the replication's confidence interval.
    #[serde(rename = "original_in_replication_ci")]
    OriginalInReplicationCI,
    /// Replication effect lies inside the original's confidence interval.
    #[serde(rename = "replication_in_original_ci")]
    ReplicationInOriginalCI,
}

impl ClassificationMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [
        Self::RepeatedSignificance,
        Self::OriginalInReplicationCI,
        Self::ReplicationInOriginalCI,
    ];

    /// Parse the short labels used by front ends and environment variables.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "significance" | "repeated_significance" => Some(Self::RepeatedSignificance),
            "orig_in_rep_ci" | "original_in_replication_ci" => Some(Self::OriginalInReplicationCI),
            "rep_in_orig_ci" | "replication_in_original_ci" => Some(Self::ReplicationInOriginalCI),
            _ => None,
        }
    }

    /// Short label, the inverse of [`ClassificationMethod::parse`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::RepeatedSignificance => "significance",
            Self::OriginalInReplicationCI => "orig_in_rep_ci",
            Self::ReplicationInOriginalCI => "rep_in_orig_ci",
        }
    }
}

/// Strategy used for [`ClassificationMethod::RepeatedSignificance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificanceVariant {
    /// Requires a significant original; distinguishes reversals.
    #[default]
    Gated,
    /// Direction heuristics first, no original gate, reversals count as failures.
    Lenient,
}

impl SignificanceVariant {
    /// Parse `"gated"` / `"lenient"` (case-insensitive).
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "gated" | "rigorous" => Some(Self::Gated),
            "lenient" | "legacy" => Some(Self::Lenient),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: ALPHA_05,
            z_critical: Z_95,
            method: ClassificationMethod::RepeatedSignificance,
            significance_variant: SignificanceVariant::Gated,
        }
    }
}

impl Config {
    /// Check that thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `alpha` is outside (0, 1) or `z_critical`
    /// is not finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if !(self.z_critical.is_finite() && self.z_critical > 0.0) {
            return Err(ConfigError::InvalidCriticalValue(self.z_critical));
        }
        Ok(())
    }

    /// Merge overrides from environment variables.
    ///
    /// - `REPLICATION_METHOD`: `significance`, `orig_in_rep_ci`, `rep_in_orig_ci`
    /// - `REPLICATION_VARIANT`: `gated`, `lenient`
    /// - `REPLICATION_ALPHA`: significance threshold
    /// - `REPLICATION_Z_CRITICAL`: CI critical value
    ///
    /// Missing or unparseable values leave the field unchanged.
    pub fn merge_env(mut self) -> Self {
        if let Some(method) = env::var("REPLICATION_METHOD")
            .ok()
            .and_then(|v| ClassificationMethod::parse(&v))
        {
            self.method = method;
        }
        if let Some(variant) = env::var("REPLICATION_VARIANT")
            .ok()
            .and_then(|v| SignificanceVariant::parse(&v))
        {
            self.significance_variant = variant;
        }
        if let Some(alpha) = parse_f64_env("REPLICATION_ALPHA") {
            self.alpha = alpha;
        }
        if let Some(z) = parse_f64_env("REPLICATION_Z_CRITICAL") {
            self.z_critical = z;
        }
        self
    }
}

fn parse_f64_env(key: &str) -> Option<f64> {
    env::var(key).ok()?.trim().parse().ok()
}
