//! Input record types and common value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIntervalError;

/// Declared type of a reported effect size.
///
/// Deserialization goes through [`EffectSizeType::parse`], so upstream labels
/// such as `"R"`, `""` or `"Eta Squared"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EffectSizeType {
    /// Pearson correlation coefficient.
    #[default]
    R,
    /// Cohen's d (standardized mean difference).
    D,
    /// Eta-squared (proportion of variance explained).
    EtaSquared,
    /// Anything else; treated like a correlation.
    Unknown,
}

impl EffectSizeType {
    /// Parse a loosely formatted type label.
    ///
    /// Case-insensitive, surrounding whitespace ignored. An empty label means
    /// `r`. Unrecognized labels map to [`EffectSizeType::Unknown`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "" | "r" => Self::R,
            "d" => Self::D,
            "etasq" | "eta squared" | "eta_squared" | "eta-squared" => Self::EtaSquared,
            _ => Self::Unknown,
        }
    }
}

impl From<&str> for EffectSizeType {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for EffectSizeType {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl fmt::Display for EffectSizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::R => "r",
            Self::D => "d",
            Self::EtaSquared => "etasq",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Build an interval, swapping the bounds if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// Inclusive membership test.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Both bounds finite and ordered.
    pub fn is_usable(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }

    /// Interval width.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.lower, self.upper)
    }
}

/// Parses the textual CI forms found in upstream spreadsheets:
/// `"[0.12, 0.45]"`, `"(0.12; 0.45)"`, `"0.12, 0.45"`.
impl FromStr for ConfidenceInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '(' | ')'))
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Err(ParseIntervalError::Empty);
        }

        let parts: Vec<&str> = cleaned.split([',', ';']).map(str::trim).collect();
        if parts.len() != 2 {
            return Err(ParseIntervalError::BoundCount(parts.len()));
        }

        let parse_bound = |raw: &str| -> Result<f64, ParseIntervalError> {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseIntervalError::InvalidBound(raw.to_string()))
        };

        let a = parse_bound(parts[0])?;
        let b = parse_bound(parts[1])?;
        Ok(Self::new(a, b))
    }
}

/// One side (original or replication) of a [`ReplicationRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Study {
    /// Raw effect size, sign as reported.
    pub effect_size: f64,
    /// Declared effect-size type.
    pub effect_type: EffectSizeType,
    /// Sample size.
    pub n: u32,
    /// Pre-supplied confidence interval in raw units.
    pub ci: Option<ConfidenceInterval>,
}

/// One original/replication study pair.
///
/// Records are read-only inputs: nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationRecord {
    /// Raw original effect size.
    pub original_effect_size: f64,
    /// Raw replication effect size.
    pub replication_effect_size: f64,
    /// Declared type of the original effect size.
    #[serde(default)]
    pub original_effect_type: EffectSizeType,
    /// Declared type of the replication effect size.
    #[serde(default)]
    pub replication_effect_type: EffectSizeType,
    /// Original sample size.
    pub original_n: u32,
    /// Replication sample size.
    pub replication_n: u32,
    /// Pre-supplied original CI, if the source reports one.
    #[serde(default)]
    pub original_ci: Option<ConfidenceInterval>,
    /// Pre-supplied replication CI, if the source reports one.
    #[serde(default)]
    pub replication_ci: Option<ConfidenceInterval>,
}

impl ReplicationRecord {
    /// Record where both studies report a Pearson correlation.
    pub fn from_correlations(original_r: f64, original_n: u32, replication_r: f64, replication_n: u32) -> Self {
        Self {
            original_effect_size: original_r,
            replication_effect_size: replication_r,
            original_effect_type: EffectSizeType::R,
            replication_effect_type: EffectSizeType::R,
            original_n,
            replication_n,
            original_ci: None,
            replication_ci: None,
        }
    }

    /// Set the declared effect-size types.
    pub fn with_effect_types(mut self, original: EffectSizeType, replication: EffectSizeType) -> Self {
        self.original_effect_type = original;
        self.replication_effect_type = replication;
        self
    }

    /// Attach a pre-supplied original CI.
    pub fn with_original_ci(mut self, ci: ConfidenceInterval) -> Self {
        self.original_ci = Some(ci);
        self
    }

    /// Attach a pre-supplied replication CI.
    pub fn with_replication_ci(mut self, ci: ConfidenceInterval) -> Self {
        self.replication_ci = Some(ci);
        self
    }

    /// The original study.
    pub fn original(&self) -> Study {
        Study {
            effect_size: self.original_effect_size,
            effect_type: self.original_effect_type,
            n: self.original_n,
            ci: self.original_ci,
        }
    }

    /// The replication study.
    pub fn replication(&self) -> Study {
        Study {
            effect_size: self.replication_effect_size,
            effect_type: self.replication_effect_type,
            n: self.replication_n,
            ci: self.replication_ci,
        }
    }

    /// Both sample sizes are positive.
    pub fn has_sample_sizes(&self) -> bool {
        self.original_n > 0 && self.replication_n > 0
    }
}

/// Read-only supplier of replication records.
///
/// The ingestion layer loads its data once and hands the engine a source;
/// the engine never caches or mutates what it reads.
pub trait RecordSource {
    /// All records, in source order.
    fn records(&self) -> &[ReplicationRecord];
}

/// In-memory [`RecordSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<ReplicationRecord>,
}

impl RecordSet {
    /// Wrap an already-parsed batch of records.
    pub fn new(records: Vec<ReplicationRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for RecordSet {
    fn records(&self) -> &[ReplicationRecord] {
        &self.records
    }
}

impl FromIterator<ReplicationRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ReplicationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
