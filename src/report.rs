//! JSON report files for batch classification runs.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::{ClassificationMethod, Config, SignificanceVariant};
use crate::error::ReportError;
use crate::result::{OutcomeResult, OutcomeSummary};

#[derive(Serialize)]
struct ClassificationReport<'a> {
    method: ClassificationMethod,
    significance_variant: SignificanceVariant,
    alpha: f64,
    z_critical: f64,
    summary: &'a OutcomeSummary,
    results: &'a [OutcomeResult],
}

/// Write a pretty-printed JSON report of a batch run.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file or its directory cannot be
/// created, and [`ReportError::Serialize`] if encoding fails.
pub fn write_report(
    path: &Path,
    config: &Config,
    summary: &OutcomeSummary,
    results: &[OutcomeResult],
) -> Result<(), ReportError> {
    let report = ClassificationReport {
        method: config.method,
        significance_variant: config.significance_variant,
        alpha: config.alpha,
        z_critical: config.z_critical,
        summary,
        results,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, &report)?;

    info!(path = %path.display(), records = results.len(), "wrote classification report");
    Ok(())
}
