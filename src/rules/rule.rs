#![forbid(unsafe_code)]

//! A field-level rule: one field, one severity, an ordered list of checks

use crate::result::Failure;
use crate::rules::check::{Check, MessageSource};
use crate::types::{CascadeMode, Severity};
use std::fmt;

/// One field-level rule
///
/// The severity is fixed when the rule is created. Checks run in the order
/// they were attached; the cascade mode decides whether a failing check ends
/// the rule.
pub struct Rule<T> {
    field: String,
    severity: Severity,
    cascade: CascadeMode,
    checks: Vec<Check<T>>,
}

impl<T> Rule<T> {
    /// Creates a rule with no checks
    pub fn new(field: impl Into<String>, severity: Severity, cascade: CascadeMode) -> Self {
        Self {
            field: field.into(),
            severity,
            cascade,
            checks: Vec::new(),
        }
    }

    /// Name of the inspected field
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn cascade(&self) -> CascadeMode {
        self.cascade
    }

    /// Number of checks attached to the rule
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub(crate) fn set_cascade(&mut self, cascade: CascadeMode) {
        self.cascade = cascade;
    }

    pub(crate) fn push_check(&mut self, check: Check<T>) {
        self.checks.push(check);
    }

    pub(crate) fn last_check_mut(&mut self) -> Option<&mut Check<T>> {
        self.checks.last_mut()
    }

    /// Runs the checks against `instance`, appending one failure per failing check
    ///
    /// With `CascadeMode::Stop` the first failing check ends the rule.
    pub fn run(&self, instance: &T, failures: &mut Vec<Failure>) {
        for check in &self.checks {
            if check.passes(instance) {
                continue;
            }

            failures.push(Failure::new(
                self.field.clone(),
                check.message_for(instance),
                self.severity,
            ));

            if self.cascade == CascadeMode::Stop {
                break;
            }
        }
    }

    /// Attaches a check from a bare predicate with no message
    pub fn add_check<F>(&mut self, predicate: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push_check(Check::new(Box::new(predicate), MessageSource::Empty));
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("severity", &self.severity)
            .field("cascade", &self.cascade)
            .field("checks", &self.checks.len())
            .finish()
    }
}
