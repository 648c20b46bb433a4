//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::config::ClassificationMethod;
use crate::result::{Outcome, OutcomeResult, OutcomeSummary};

const LABEL_WIDTH: usize = 14;

/// Format a single result as a one-line colored badge with diagnostics.
pub fn format_result(result: &OutcomeResult) -> String {
    let mut line = format_outcome(result.label, LABEL_WIDTH);

    if let Some(p) = result.p_value_original {
        line.push_str(&format!("  p(orig) = {}", format_p(p)));
    }
    if let Some(p) = result.p_value_replication {
        line.push_str(&format!("  p(rep) = {}", format_p(p)));
    }
    if let Some(ci) = result.confidence_interval {
        line.push_str(&format!("  CI = {}", ci));
    }

    line
}

/// Format a batch summary for human-readable terminal output.
pub fn format_summary(summary: &OutcomeSummary, method: ClassificationMethod) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("replication-oracle\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Method: {}\n", method_name(method)));
    output.push_str(&format!("  Records classified: {}\n", summary.n));
    output.push('\n');

    if summary.n == 0 {
        output.push_str(&format!("  {}\n\n", "No records with sample sizes".yellow().bold()));
    } else {
        for label in [
            Outcome::Success,
            Outcome::Failure,
            Outcome::Reversal,
            Outcome::Inconclusive,
        ] {
            output.push_str(&format!(
                "    {} {:>6}  ({:>5.1}%)\n",
                format_outcome(label, LABEL_WIDTH),
                summary.count(label),
                summary.percent(label)
            ));
        }
        output.push('\n');
    }

    output.push_str(&sep);
    output.push('\n');

    if method == ClassificationMethod::RepeatedSignificance {
        output.push_str("Note: Records whose original effect is not significant are inconclusive.\n");
    } else {
        output.push_str("Note: Reported intervals are used when available, Fisher intervals otherwise.\n");
    }

    output
}

/// Format an Outcome as a colored badge, padded to `width` visible columns.
fn format_outcome(outcome: Outcome, width: usize) -> String {
    // Pad before coloring: escape codes would otherwise count toward the width
    let padded = pad_label(outcome, width);
    match outcome {
        Outcome::Success => padded.green().to_string(),
        Outcome::Failure => padded.red().to_string(),
        Outcome::Reversal => padded.red().bold().to_string(),
        Outcome::Inconclusive => padded.dimmed().to_string(),
    }
}

fn pad_label(outcome: Outcome, width: usize) -> String {
    let label = match outcome {
        Outcome::Success => "Success",
        Outcome::Failure => "Failure",
        Outcome::Reversal => "Reversal",
        Outcome::Inconclusive => "Inconclusive",
    };
    format!("{:<width$}", label)
}

fn method_name(method: ClassificationMethod) -> &'static str {
    match method {
        ClassificationMethod::RepeatedSignificance => "Repeated significance",
        ClassificationMethod::OriginalInReplicationCI => "Original in replication CI",
        ClassificationMethod::ReplicationInOriginalCI => "Replication in original CI",
    }
}

fn format_p(p: f64) -> String {
    if p < 0.001 {
        "<0.001".to_string()
    } else {
        format!("{:.3}", p)
    }
}
