#![forbid(unsafe_code)]

//! Severity-tagged rule declaration and evaluation
//!
//! Rules are declared inside `declare_for_severity` blocks. Every rule created
//! while a block runs is tagged with the block's severity and receives that
//! severity's default cascade mode. Evaluation runs either every rule or only
//! the rules of one severity; rules of other tiers are never executed.

use crate::config::CascadeDefaults;
use crate::error::ValidatorError;
use crate::result::ValidationResult;
use crate::rules::{FieldSelector, Rule, RuleBuilder, RuleRegistry};
use crate::types::Severity;

/// Rule container that binds declarations to a severity tier
pub struct SeverityTaggedValidator<T> {
    registry: RuleRegistry<T>,
    defaults: CascadeDefaults,
    active: Option<Severity>,
}

impl<T: 'static> SeverityTaggedValidator<T> {
    /// Creates an empty validator with the standard cascade defaults
    pub fn new() -> Self {
        Self::with_defaults(CascadeDefaults::default())
    }

    /// Creates an empty validator with custom cascade defaults
    pub fn with_defaults(defaults: CascadeDefaults) -> Self {
        Self {
            registry: RuleRegistry::new(),
            defaults,
            active: None,
        }
    }

    /// Run `block` with `severity` as the active tier
    ///
    /// Calling this again for the same severity appends further rules under
    /// that tier. The active tier is cleared when the block returns, whether
    /// it succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidState` if another block is already
    /// running, and propagates any error returned by `block`.
    pub fn declare_for_severity<F>(
        &mut self,
        severity: Severity,
        block: F,
    ) -> Result<(), ValidatorError>
    where
        F: FnOnce(&mut Self) -> Result<(), ValidatorError>,
    {
        if let Some(active) = self.active {
            return Err(ValidatorError::InvalidState(format!(
                "cannot declare {} rules while {} rules are being declared",
                severity, active
            )));
        }

        self.active = Some(severity);
        let outcome = block(self);
        self.active = None;
        outcome
    }

    /// Declare an Error-tier rule on `selector`
    pub fn error_rule_for<S>(
        &mut self,
        selector: S,
    ) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        self.tiered_rule_for(Severity::Error, selector)
    }

    /// Declare a Warning-tier rule on `selector`
    pub fn warning_rule_for<S>(
        &mut self,
        selector: S,
    ) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        self.tiered_rule_for(Severity::Warning, selector)
    }

    /// Declare an Info-tier rule on `selector`
    pub fn info_rule_for<S>(&mut self, selector: S) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        self.tiered_rule_for(Severity::Info, selector)
    }

    /// Declare a rule on `selector` under whichever tier is active
    pub fn rule_for<S>(&mut self, selector: S) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        let Some(severity) = self.active else {
            return Err(ValidatorError::InvalidState(format!(
                "rule for '{}' declared outside a severity block",
                selector.name()
            )));
        };
        self.open_rule(severity, selector)
    }

    fn tiered_rule_for<S>(
        &mut self,
        severity: Severity,
        selector: S,
    ) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        let active = self.active;
        match active {
            Some(active) if active == severity => self.open_rule(severity, selector),
            Some(active) => Err(ValidatorError::InvalidState(format!(
                "{} rule for '{}' declared inside the {} block",
                severity,
                selector.name(),
                active
            ))),
            None => Err(ValidatorError::InvalidState(format!(
                "{} rule for '{}' declared outside a severity block",
                severity,
                selector.name()
            ))),
        }
    }

    fn open_rule<S>(
        &mut self,
        severity: Severity,
        selector: S,
    ) -> Result<RuleBuilder<'_, T, S>, ValidatorError>
    where
        S: FieldSelector<T> + 'static,
    {
        let rule = Rule::new(
            selector.name(),
            severity,
            self.defaults.for_severity(severity),
        );
        let rule = self.registry.add_rule(rule)?;
        Ok(RuleBuilder::new(rule, selector))
    }
}

impl<T> SeverityTaggedValidator<T> {
    /// Run every rule against `instance`, in declaration order
    pub fn evaluate(&self, instance: &T) -> ValidationResult {
        Self::run(self.registry.all_rules(), instance)
    }

    /// Run only the rules of `severity` against `instance`
    pub fn evaluate_severity(&self, instance: &T, severity: Severity) -> ValidationResult {
        Self::run(self.registry.rules_tagged_with(severity), instance)
    }

    /// The declared rules
    pub fn registry(&self) -> &RuleRegistry<T> {
        &self.registry
    }

    /// Returns true while a `declare_for_severity` block is running
    pub fn is_declaring(&self) -> bool {
        self.active.is_some()
    }

    fn run<'a>(rules: impl Iterator<Item = &'a Rule<T>>, instance: &T) -> ValidationResult
    where
        T: 'a,
    {
        let mut failures = Vec::new();
        for rule in rules {
            rule.run(instance, &mut failures);
        }
        ValidationResult::new(failures)
    }
}

impl<T: 'static> Default for SeverityTaggedValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SeverityTaggedValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeverityTaggedValidator")
            .field("registry", &self.registry)
            .field("defaults", &self.defaults)
            .field("active", &self.active)
            .finish()
    }
}
