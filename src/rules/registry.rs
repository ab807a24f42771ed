#![forbid(unsafe_code)]

//! Rule registry holding the rules declared for one target type
//!
//! Rules are kept in declaration order and are never removed.

use crate::error::ValidatorError;
use crate::rules::Rule;
use crate::types::Severity;

/// Ordered collection of the rules declared for `T`
pub struct RuleRegistry<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleRegistry<T> {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule and return it for further configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidArgument` if the rule's field name is
    /// empty or only whitespace.
    pub fn add_rule(&mut self, rule: Rule<T>) -> Result<&mut Rule<T>, ValidatorError> {
        if rule.field().trim().is_empty() {
            return Err(ValidatorError::InvalidArgument(format!(
                "{} rule declared without a field name",
                rule.severity()
            )));
        }

        self.rules.push(rule);
        let index = self.rules.len() - 1;
        Ok(&mut self.rules[index])
    }

    /// Iterate over the rules of one severity, in declaration order
    pub fn rules_tagged_with(&self, severity: Severity) -> impl Iterator<Item = &Rule<T>> {
        self.rules
            .iter()
            .filter(move |rule| rule.severity() == severity)
    }

    /// Iterate over all rules, in declaration order
    pub fn all_rules(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    /// Number of rules of one severity
    pub fn count_tagged_with(&self, severity: Severity) -> usize {
        self.rules_tagged_with(severity).count()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for RuleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for RuleRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules)
            .finish()
    }
}
