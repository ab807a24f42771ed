#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One failure record per failure, in result order
//! 2. One status record

use crate::result::ValidationResult;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats validation results as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the validation result as JSONL
    pub fn format(&self, result: &ValidationResult) -> String {
        let mut output = String::new();

        for failure in result.failures() {
            let record = FailureRecord {
                record_type: "failure",
                field: &failure.field,
                severity: failure.severity.as_str(),
                message: &failure.message,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let counts = result.count_by_severity();
        let status = StatusRecord {
            record_type: "status",
            valid: result.is_valid(),
            errors: counts.errors as u64,
            warnings: counts.warnings as u64,
            infos: counts.infos as u64,
            total: counts.total() as u64,
        };

        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure record for JSONL output
#[derive(Debug, Serialize)]
struct FailureRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    field: &'a str,
    severity: &'static str,
    message: &'a str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    valid: bool,
    errors: u64,
    warnings: u64,
    infos: u64,
    total: u64,
}
