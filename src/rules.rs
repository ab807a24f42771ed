#![forbid(unsafe_code)]

//! Rule definitions, field selectors and the rule registry

pub mod builder;
pub mod check;
mod field;
mod registry;
mod rule;

// Re-export core types
pub use builder::RuleBuilder;
pub use check::{AsText, Check, Emptiness, MessageSource, Predicate, Presence};
pub use field::{Field, FieldSelector};
pub use registry::RuleRegistry;
pub use rule::Rule;
