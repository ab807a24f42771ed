#![forbid(unsafe_code)]

//! Lazily built validator with the public evaluation API
//!
//! A `SeverityValidator` owns a `RuleSet` and builds its rules on the first
//! evaluation call: the error, warning and info hooks run once, in that
//! order, each inside its own severity block. Concurrent first calls observe
//! a single build; afterwards the rules are read-only and evaluation needs no
//! locking.

use crate::config::EngineConfig;
use crate::error::ValidatorError;
use crate::result::ValidationResult;
use crate::types::Severity;
use crate::validator::SeverityTaggedValidator;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Rule declarations for one target type
///
/// Each hook declares the rules of one tier and defaults to declaring none.
/// The hooks run exactly once per validator, in the order error, warning,
/// info.
pub trait RuleSet<T>: Send + Sync {
    fn declare_error_rules(
        &self,
        _rules: &mut SeverityTaggedValidator<T>,
    ) -> Result<(), ValidatorError> {
        Ok(())
    }

    fn declare_warning_rules(
        &self,
        _rules: &mut SeverityTaggedValidator<T>,
    ) -> Result<(), ValidatorError> {
        Ok(())
    }

    fn declare_info_rules(
        &self,
        _rules: &mut SeverityTaggedValidator<T>,
    ) -> Result<(), ValidatorError> {
        Ok(())
    }
}

/// Evaluation API shared by all severity validators
pub trait Validate<T> {
    /// Evaluate every tier
    fn validate(&self, instance: &T) -> Result<ValidationResult, ValidatorError>;

    /// Evaluate only Error-tier rules
    fn validate_errors(&self, instance: &T) -> Result<ValidationResult, ValidatorError>;

    /// Evaluate only Warning-tier rules
    fn validate_warnings(&self, instance: &T) -> Result<ValidationResult, ValidatorError>;

    /// Evaluate only Info-tier rules
    fn validate_info(&self, instance: &T) -> Result<ValidationResult, ValidatorError>;
}

/// Lifecycle of the lazily built rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Unbuilt,
    Building,
    Built,
    /// A declaration hook returned an error or panicked; the validator stays unusable
    Failed,
}

impl BuildState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => BuildState::Unbuilt,
            1 => BuildState::Building,
            2 => BuildState::Built,
            _ => BuildState::Failed,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            BuildState::Unbuilt => 0,
            BuildState::Building => 1,
            BuildState::Built => 2,
            BuildState::Failed => 3,
        }
    }
}

/// A validator whose rules are declared by `R` and built on first use
pub struct SeverityValidator<T, R> {
    rules: R,
    config: EngineConfig,
    state: AtomicU8,
    built: OnceLock<Result<SeverityTaggedValidator<T>, ValidatorError>>,
}

impl<T, R> SeverityValidator<T, R>
where
    T: 'static,
    R: RuleSet<T>,
{
    /// Creates an unbuilt validator with the default configuration
    pub fn new(rules: R) -> Self {
        Self::with_config(rules, EngineConfig::default())
    }

    /// Creates an unbuilt validator with `config`
    pub fn with_config(rules: R, config: EngineConfig) -> Self {
        Self {
            rules,
            config,
            state: AtomicU8::new(BuildState::Unbuilt.as_u8()),
            built: OnceLock::new(),
        }
    }

    /// Current build state
    pub fn build_state(&self) -> BuildState {
        BuildState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// The rule declarations this validator was created with
    pub fn rule_set(&self) -> &R {
        &self.rules
    }

    /// Build the rules if needed and return the built validator
    ///
    /// The build runs at most once. If it failed, the same error is returned
    /// on every call.
    pub fn ensure_built(&self) -> Result<&SeverityTaggedValidator<T>, ValidatorError> {
        self.built
            .get_or_init(|| self.build())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Number of declared rules, building them if needed
    pub fn rule_count(&self) -> Result<usize, ValidatorError> {
        Ok(self.ensure_built()?.registry().len())
    }

    pub fn validate(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        let result = self.ensure_built()?.evaluate(instance);
        tracing::trace!(failures = result.len(), "evaluated all tiers");
        Ok(result)
    }

    pub fn validate_errors(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        self.validate_severity(instance, Severity::Error)
    }

    pub fn validate_warnings(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        self.validate_severity(instance, Severity::Warning)
    }

    pub fn validate_info(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        self.validate_severity(instance, Severity::Info)
    }

    /// Evaluate only the rules of `severity`
    pub fn validate_severity(
        &self,
        instance: &T,
        severity: Severity,
    ) -> Result<ValidationResult, ValidatorError> {
        let result = self.ensure_built()?.evaluate_severity(instance, severity);
        tracing::trace!(%severity, failures = result.len(), "evaluated tier");
        Ok(result)
    }

    /// Evaluate every tier for each instance, in parallel
    ///
    /// Results are returned in the order of `instances`.
    pub fn validate_batch(&self, instances: &[T]) -> Result<Vec<ValidationResult>, ValidatorError>
    where
        T: Sync,
    {
        let validator = self.ensure_built()?;
        Ok(instances
            .par_iter()
            .map(|instance| validator.evaluate(instance))
            .collect())
    }

    fn build(&self) -> Result<SeverityTaggedValidator<T>, ValidatorError> {
        self.state
            .store(BuildState::Building.as_u8(), Ordering::Release);
        tracing::debug!("declaring validation rules");

        match self.declare_all() {
            Ok(validator) => {
                let registry = validator.registry();
                tracing::debug!(
                    errors = registry.count_tagged_with(Severity::Error),
                    warnings = registry.count_tagged_with(Severity::Warning),
                    infos = registry.count_tagged_with(Severity::Info),
                    "validation rules declared"
                );
                self.state
                    .store(BuildState::Built.as_u8(), Ordering::Release);
                Ok(validator)
            }
            Err(e) => {
                tracing::warn!(error = %e, "declaring validation rules failed");
                self.state
                    .store(BuildState::Failed.as_u8(), Ordering::Release);
                Err(e)
            }
        }
    }

    fn declare_all(&self) -> Result<SeverityTaggedValidator<T>, ValidatorError> {
        let mut validator = SeverityTaggedValidator::with_defaults(self.config.cascade);

        for severity in Severity::ALL {
            validator
                .declare_for_severity(severity, |v| self.run_hook(severity, v))
                .map_err(|source| ValidatorError::Build {
                    severity,
                    source: Box::new(source),
                })?;
        }

        Ok(validator)
    }

    /// Run the hook for `severity`; a panic is reported as `ValidatorError::Panicked`
    fn run_hook(
        &self,
        severity: Severity,
        validator: &mut SeverityTaggedValidator<T>,
    ) -> Result<(), ValidatorError> {
        let hook = AssertUnwindSafe(|| match severity {
            Severity::Error => self.rules.declare_error_rules(validator),
            Severity::Warning => self.rules.declare_warning_rules(validator),
            Severity::Info => self.rules.declare_info_rules(validator),
        });

        match panic::catch_unwind(hook) {
            Ok(outcome) => outcome,
            Err(payload) => Err(ValidatorError::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl<T, R> Validate<T> for SeverityValidator<T, R>
where
    T: 'static,
    R: RuleSet<T>,
{
    fn validate(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        SeverityValidator::validate(self, instance)
    }

    fn validate_errors(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        SeverityValidator::validate_errors(self, instance)
    }

    fn validate_warnings(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        SeverityValidator::validate_warnings(self, instance)
    }

    fn validate_info(&self, instance: &T) -> Result<ValidationResult, ValidatorError> {
        SeverityValidator::validate_info(self, instance)
    }
}

impl<T, R: std::fmt::Debug> std::fmt::Debug for SeverityValidator<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeverityValidator")
            .field("rules", &self.rules)
            .field("config", &self.config)
            .field(
                "state",
                &BuildState::from_u8(self.state.load(Ordering::Acquire)),
            )
            .finish_non_exhaustive()
    }
}
