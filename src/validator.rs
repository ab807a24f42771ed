//! Severity-tagged validators: declaration, lazy build and evaluation

pub mod base;
pub mod tagged;

pub use base::{BuildState, RuleSet, SeverityValidator, Validate};
pub use tagged::SeverityTaggedValidator;
