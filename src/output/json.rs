//! JSON serialization for classification results.

use serde::Serialize;

/// Serialize a result (or any batch of results) to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a result (or any batch of results) to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassificationMethod;
    use crate::result::{Outcome, OutcomeResult};
    use crate::types::ConfidenceInterval;

    fn make_result() -> OutcomeResult {
        OutcomeResult {
            label: Outcome::Success,
            method: ClassificationMethod::OriginalInReplicationCI,
            p_value_original: None,
            p_value_replication: None,
            confidence_interval: Some(ConfidenceInterval { lower: 0.125, upper: 0.5 }),
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"label\":\"success\""));
        assert!(json.contains("\"method\":\"original_in_replication_ci\""));
        assert!(json.contains("\"lower\":0.125"));
        assert!(json.contains("\"p_value_original\":null"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&[make_result(), make_result()]).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert_eq!(json.matches("\"label\"").count(), 2);
    }

    #[test]
    fn test_round_trip() {
        let json = to_json(&make_result()).unwrap();
        let back: OutcomeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, make_result());
    }
}
