//! Error types for the severity validator
//!
//! Declaration defects surface as `ValidatorError`; configuration problems as
//! `ConfigError`. Validation failures are never errors: they are returned as
//! `Failure` entries inside a `ValidationResult`.

use crate::types::Severity;

/// Declaration and build errors
///
/// These indicate a programming defect in the code declaring rules and are
/// not recoverable. The type is `Clone` so a failed build can be reported to
/// every later caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// A rule declaration received an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A declaration operation was called outside its owning block
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A declaration hook panicked
    #[error("Rule declaration panicked: {0}")]
    Panicked(String),

    /// Declaring the rules of one tier failed
    #[error("Failed to declare {severity} rules: {source}")]
    Build {
        severity: Severity,
        #[source]
        source: Box<ValidatorError>,
    },
}

impl ValidatorError {
    /// Returns the innermost error, unwrapping any `Build` layers
    pub fn root_cause(&self) -> &ValidatorError {
        match self {
            ValidatorError::Build { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    InvalidSyntax(#[from] toml::de::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
