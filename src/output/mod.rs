//! Human-readable and machine-readable renderings of classification results.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_result, format_summary};
