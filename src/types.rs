#![forbid(unsafe_code)]

//! Core domain types for the severity validator
//!
//! This module defines the small value types shared by rules, results and
//! configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of a rule and of every failure it produces
///
/// The three tiers are independent categories, not a ranked scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// All tiers, in the order their declaration hooks run
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Returns the lowercase name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether later checks on a rule still run after an earlier one failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeMode {
    /// Skip the remaining checks of the rule after the first failure
    Stop,
    /// Run every check of the rule regardless of earlier failures
    Continue,
}

impl CascadeMode {
    /// Default policy for rules declared under `severity`
    ///
    /// Error rules stop on the first failure; Warning and Info rules continue.
    pub fn default_for(severity: Severity) -> Self {
        match severity {
            Severity::Error => CascadeMode::Stop,
            Severity::Warning | Severity::Info => CascadeMode::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cascade_per_severity() {
        assert_eq!(CascadeMode::default_for(Severity::Error), CascadeMode::Stop);
        assert_eq!(
            CascadeMode::default_for(Severity::Warning),
            CascadeMode::Continue
        );
        assert_eq!(
            CascadeMode::default_for(Severity::Info),
            CascadeMode::Continue
        );
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let parsed: Severity = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(parsed, Severity::Info);
    }

    #[test]
    fn test_type_derives() {
        // Verify all types implement Hash for use in HashMaps/HashSets
        use std::collections::HashSet;

        let severities: HashSet<Severity> = Severity::ALL.into_iter().collect();
        assert_eq!(severities.len(), 3);

        let mut modes = HashSet::new();
        modes.insert(CascadeMode::Stop);
        modes.insert(CascadeMode::Continue);
        assert_eq!(modes.len(), 2);
    }
}
