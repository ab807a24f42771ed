#![forbid(unsafe_code)]

//! Severity validator: rule-based validation in Error, Warning and Info tiers
//!
//! Rules are declared per field under one of three severity tiers. A
//! validator evaluates every tier at once or any single tier in isolation,
//! and always returns a `ValidationResult` whose failures carry their
//! severity.
//!
//! ```
//! use severity_validator::{
//!     Field, RuleSet, SeverityTaggedValidator, SeverityValidator, ValidatorError,
//! };
//!
//! struct Account {
//!     email: Option<String>,
//!     nickname: Option<String>,
//! }
//!
//! struct AccountRules;
//!
//! impl RuleSet<Account> for AccountRules {
//!     fn declare_error_rules(
//!         &self,
//!         rules: &mut SeverityTaggedValidator<Account>,
//!     ) -> Result<(), ValidatorError> {
//!         rules
//!             .error_rule_for(Field::new("Email", |a: &Account| &a.email))?
//!             .not_null();
//!         Ok(())
//!     }
//!
//!     fn declare_info_rules(
//!         &self,
//!         rules: &mut SeverityTaggedValidator<Account>,
//!     ) -> Result<(), ValidatorError> {
//!         rules
//!             .info_rule_for(Field::new("Nickname", |a: &Account| &a.nickname))?
//!             .not_null();
//!         Ok(())
//!     }
//! }
//!
//! let validator = SeverityValidator::new(AccountRules);
//! let account = Account { email: None, nickname: None };
//!
//! let all = validator.validate(&account)?;
//! assert_eq!(all.len(), 2);
//!
//! let info = validator.validate_info(&account)?;
//! assert_eq!(info.failures()[0].field, "Nickname");
//! # Ok::<(), ValidatorError>(())
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod output;
pub mod result;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export error types for convenient access
pub use error::{ConfigError, ValidatorError};

// Re-export core domain types for convenient access
pub use config::{CascadeDefaults, EngineConfig};
pub use result::{Failure, SeverityFilterExt, ValidationResult};
pub use rules::{Field, FieldSelector, RuleBuilder, RuleRegistry};
pub use types::{CascadeMode, Severity};
pub use validator::{BuildState, RuleSet, SeverityTaggedValidator, SeverityValidator, Validate};
