//! Main `ReplicationOracle` entry point and builder.

use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::{classify_record, sign_convention, to_correlation};
use crate::config::{ClassificationMethod, Config, SignificanceVariant};
use crate::error::ConfigError;
use crate::result::{OutcomeResult, OutcomeSummary, ScatterPoint};
use crate::types::{RecordSource, ReplicationRecord};

/// Main entry point for replication classification.
///
/// Use the builder pattern to configure the methodology, then classify one
/// record or a whole batch.
///
/// # Example
///
/// ```
/// use replication_oracle::{ClassificationMethod, Outcome, ReplicationOracle, ReplicationRecord};
///
/// let record = ReplicationRecord::from_correlations(0.40, 50, 0.35, 80);
///
/// let result = ReplicationOracle::new().classify(&record);
/// assert_eq!(result.label, Outcome::Success);
///
/// let result = ReplicationOracle::new()
///     .method(ClassificationMethod::OriginalInReplicationCI)
///     .classify(&record);
/// assert_eq!(result.label, Outcome::Success);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplicationOracle {
    config: Config,
}

impl ReplicationOracle {
    /// Create with default configuration (gated repeated significance, α = 0.05).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the thresholds are out of range.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Merge overrides from `REPLICATION_*` environment variables.
    ///
    /// See [`Config::merge_env`] for the recognized keys.
    pub fn from_env(mut self) -> Self {
        self.config = self.config.merge_env();
        self
    }

    /// Set the classification method.
    pub fn method(mut self, method: ClassificationMethod) -> Self {
        self.config.method = method;
        self
    }

    /// Set the repeated-significance strategy.
    pub fn significance_variant(mut self, variant: SignificanceVariant) -> Self {
        self.config.significance_variant = variant;
        self
    }

    /// Set the significance threshold.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the critical value for computed confidence intervals.
    pub fn z_critical(mut self, z: f64) -> Self {
        self.config.z_critical = z;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify one record.
    pub fn classify(&self, record: &ReplicationRecord) -> OutcomeResult {
        classify_record(record, &self.config)
    }

    /// Classify every record, preserving input order.
    ///
    /// Runs in parallel when the `parallel` feature is enabled.
    pub fn classify_all(&self, records: &[ReplicationRecord]) -> Vec<OutcomeResult> {
        #[cfg(feature = "parallel")]
        let results: Vec<OutcomeResult> = crate::thread_pool::install(|| {
            records
                .par_iter()
                .map(|record| classify_record(record, &self.config))
                .collect()
        });

        #[cfg(not(feature = "parallel"))]
        let results: Vec<OutcomeResult> = crate::thread_pool::install(|| {
            records
                .iter()
                .map(|record| classify_record(record, &self.config))
                .collect()
        });

        results
    }

    /// Classify every record of a source.
    pub fn classify_source<S: RecordSource + ?Sized>(&self, source: &S) -> Vec<OutcomeResult> {
        self.classify_all(source.records())
    }

    /// Tally labels over a batch.
    ///
    /// Only records that can be plotted are counted: both sample sizes
    /// positive and both effects normalizable to a nonzero correlation.
    /// Everything else is left out of the tallies and the denominator, so the
    /// summary covers the same records as [`ReplicationOracle::scatter_points`].
    pub fn summarize(&self, records: &[ReplicationRecord]) -> OutcomeSummary {
        let results = self.classify_all(records);
        let summary: OutcomeSummary = records
            .iter()
            .zip(&results)
            .filter(|(record, _)| record.has_sample_sizes() && normalized_pair(record).is_some())
            .map(|(_, result)| result.label)
            .collect();

        info!(
            method = self.config.method.label(),
            records = records.len(),
            counted = summary.n,
            success = summary.success,
            failure = summary.failure,
            reversal = summary.reversal,
            inconclusive = summary.inconclusive,
            "classified batch"
        );
        summary
    }

    /// Sign-normalized correlation pairs for plotting, with their labels.
    ///
    /// Records whose effects cannot be normalized, or where either normalized
    /// effect is exactly zero, are skipped.
    pub fn scatter_points(&self, records: &[ReplicationRecord]) -> Vec<ScatterPoint> {
        let results = self.classify_all(records);
        records
            .iter()
            .zip(results)
            .filter_map(|(record, result)| {
                let (original, replication) = normalized_pair(record)?;
                let (original, replication) = sign_convention(original, replication);
                Some(ScatterPoint {
                    original,
                    replication,
                    outcome: result.label,
                })
            })
            .collect()
    }
}

/// Both effects in correlation space, when both exist and are nonzero.
fn normalized_pair(record: &ReplicationRecord) -> Option<(f64, f64)> {
    let original = to_correlation(record.original_effect_size, record.original_effect_type)?;
    let replication = to_correlation(record.replication_effect_size, record.replication_effect_type)?;
    (original != 0.0 && replication != 0.0).then_some((original, replication))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;

    fn batch() -> Vec<ReplicationRecord> {
        vec![
            ReplicationRecord::from_correlations(0.40, 50, 0.35, 80),
            ReplicationRecord::from_correlations(0.40, 50, 0.05, 200),
            ReplicationRecord::from_correlations(0.40, 50, -0.30, 60),
            ReplicationRecord::from_correlations(0.05, 20, 0.30, 60),
            ReplicationRecord::from_correlations(0.40, 0, 0.30, 60),
        ]
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let labels: Vec<Outcome> = ReplicationOracle::new()
            .classify_all(&batch())
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                Outcome::Success,
                Outcome::Failure,
                Outcome::Reversal,
                Outcome::Inconclusive,
                Outcome::Inconclusive,
            ]
        );
    }

    #[test]
    fn test_summary_skips_missing_sample_sizes() {
        let summary = ReplicationOracle::new().summarize(&batch());
        assert_eq!(summary.n, 4);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 1);
        assert_eq!(summary.reversal, 1);
        assert_eq!(summary.inconclusive, 1);
        assert_eq!(summary.percent(Outcome::Success), 25.0);
    }

    #[test]
    fn test_summary_counts_only_plottable_records() {
        let records = vec![
            ReplicationRecord::from_correlations(0.40, 50, 0.35, 80),
            ReplicationRecord::from_correlations(0.0, 50, 0.30, 80),
            ReplicationRecord::from_correlations(1.5, 50, 0.30, 80),
        ];
        let oracle = ReplicationOracle::new();
        let summary = oracle.summarize(&records);
        assert_eq!(summary.n, 1);
        assert_eq!(summary.percent(Outcome::Success), 100.0);
        assert_eq!(summary.n, oracle.scatter_points(&records).len());
    }

    #[test]
    fn test_scatter_points_use_sign_convention() {
        let records = vec![
            ReplicationRecord::from_correlations(-0.40, 50, -0.35, 80),
            ReplicationRecord::from_correlations(-0.40, 50, 0.30, 60),
            ReplicationRecord::from_correlations(0.40, 50, 0.0, 60),
            ReplicationRecord::from_correlations(1.5, 50, 0.2, 60),
        ];
        let points = ReplicationOracle::new().scatter_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].original, points[0].replication), (0.40, 0.35));
        assert_eq!(points[0].outcome, Outcome::Success);
        assert_eq!((points[1].original, points[1].replication), (0.40, -0.30));
        assert_eq!(points[1].outcome, Outcome::Reversal);
    }

    #[test]
    fn test_with_config_validates() {
        assert!(ReplicationOracle::with_config(Config::default()).is_ok());
        let bad = Config { alpha: 1.5, ..Config::default() };
        assert_eq!(
            ReplicationOracle::with_config(bad).unwrap_err(),
            ConfigError::InvalidAlpha(1.5)
        );
    }
}
