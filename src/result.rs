//! Classification result types and related structures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ClassificationMethod;
use crate::types::ConfidenceInterval;

/// Label assigned to a replication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The replication confirms the original effect.
    Success,
    /// The replication does not confirm the original effect.
    Failure,
    /// The replication finds a significant effect in the opposite direction.
    Reversal,
    /// The available data cannot settle the question.
    Inconclusive,
}

impl Outcome {
    /// Lowercase label as used by front ends.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Reversal => "reversal",
            Outcome::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete result of classifying one record under one method.
///
/// Results are recomputed on every query; the method is a parameter of the
/// query, not an attribute of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeResult {
    /// Assigned label.
    pub label: Outcome,

    /// Method that produced the label.
    pub method: ClassificationMethod,

    /// Two-tailed p-value of the original effect, when computed.
    pub p_value_original: Option<f64>,

    /// Two-tailed p-value of the replication effect, when computed.
    pub p_value_replication: Option<f64>,

    /// Interval used by CI-based methods: the replication's CI for
    /// original-in-CI checks, the original's CI for replication-in-CI checks.
    pub confidence_interval: Option<ConfidenceInterval>,
}

impl OutcomeResult {
    /// An `Inconclusive` result with no diagnostics.
    pub fn inconclusive(method: ClassificationMethod) -> Self {
        Self {
            label: Outcome::Inconclusive,
            method,
            p_value_original: None,
            p_value_replication: None,
            confidence_interval: None,
        }
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        self.label == Outcome::Success
    }
}

/// Label tallies over a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Records counted (those with positive sample sizes).
    pub n: usize,
    /// `Success` count.
    pub success: usize,
    /// `Failure` count.
    pub failure: usize,
    /// `Reversal` count.
    pub reversal: usize,
    /// `Inconclusive` count.
    pub inconclusive: usize,
}

impl OutcomeSummary {
    /// Add one label to the tallies.
    pub fn record(&mut self, label: Outcome) {
        self.n += 1;
        match label {
            Outcome::Success => self.success += 1,
            Outcome::Failure => self.failure += 1,
            Outcome::Reversal => self.reversal += 1,
            Outcome::Inconclusive => self.inconclusive += 1,
        }
    }

    /// Count for one label.
    pub fn count(&self, label: Outcome) -> usize {
        match label {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
            Outcome::Reversal => self.reversal,
            Outcome::Inconclusive => self.inconclusive,
        }
    }

    /// Percentage of `label`, rounded to one decimal. Zero for an empty batch.
    pub fn percent(&self, label: Outcome) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        (self.count(label) as f64 / self.n as f64 * 1000.0).round() / 10.0
    }
}

impl FromIterator<Outcome> for OutcomeSummary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for label in iter {
            summary.record(label);
        }
        summary
    }
}

/// A sign-normalized (original, replication) correlation pair for plotting.
///
/// The original is always ≥ 0; a negative replication means the replication
/// went the other way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Original correlation, non-negative.
    pub original: f64,
    /// Replication correlation in the original's frame.
    pub replication: f64,
    /// Label under the method used to build the point.
    pub outcome: Outcome,
}
