#![forbid(unsafe_code)]

//! Validation results and severity filters over them

use crate::types::Severity;
use serde::{Deserialize, Serialize};

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure {
    /// Name of the field the failing rule inspects
    pub field: String,

    /// Message supplied by the rule declaration; may be empty
    pub message: String,

    /// Severity of the rule that produced the failure
    pub severity: Severity,
}

impl Failure {
    pub fn new(field: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Per-tier failure counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// Outcome of one evaluation call
///
/// Failures are kept in rule declaration order. The result is valid iff it
/// holds no failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    failures: Vec<Failure>,
}

impl ValidationResult {
    pub fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// A result with no failures
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures of one severity, in result order
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Failure> {
        self.failures
            .iter()
            .filter(move |failure| failure.severity == severity)
    }

    pub fn errors(&self) -> Vec<&Failure> {
        self.with_severity(Severity::Error).collect()
    }

    pub fn warnings(&self) -> Vec<&Failure> {
        self.with_severity(Severity::Warning).collect()
    }

    pub fn infos(&self) -> Vec<&Failure> {
        self.with_severity(Severity::Info).collect()
    }

    pub fn has_no_errors(&self) -> bool {
        self.with_severity(Severity::Error).next().is_none()
    }

    pub fn has_no_warnings(&self) -> bool {
        self.with_severity(Severity::Warning).next().is_none()
    }

    pub fn has_no_infos(&self) -> bool {
        self.with_severity(Severity::Info).next().is_none()
    }

    pub fn count_by_severity(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for failure in &self.failures {
            match failure.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info => counts.infos += 1,
            }
        }
        counts
    }

    /// Append the failures of `other` after this result's failures
    pub fn merge(&mut self, other: ValidationResult) {
        self.failures.extend(other.failures);
    }
}

impl From<Vec<Failure>> for ValidationResult {
    fn from(failures: Vec<Failure>) -> Self {
        Self::new(failures)
    }
}

impl IntoIterator for ValidationResult {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

/// Severity filters over a slice of failures
pub trait SeverityFilterExt {
    fn with_severity_error(&self) -> Vec<Failure>;
    fn with_severity_warning(&self) -> Vec<Failure>;
    fn with_severity_info(&self) -> Vec<Failure>;
}

impl SeverityFilterExt for [Failure] {
    fn with_severity_error(&self) -> Vec<Failure> {
        filter_by_severity(self, Severity::Error)
    }

    fn with_severity_warning(&self) -> Vec<Failure> {
        filter_by_severity(self, Severity::Warning)
    }

    fn with_severity_info(&self) -> Vec<Failure> {
        filter_by_severity(self, Severity::Info)
    }
}

fn filter_by_severity(failures: &[Failure], severity: Severity) -> Vec<Failure> {
    failures
        .iter()
        .filter(|failure| failure.severity == severity)
        .cloned()
        .collect()
}
