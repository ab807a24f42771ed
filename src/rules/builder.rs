#![forbid(unsafe_code)]

//! Fluent builder returned when a rule is declared
//!
//! Each check method attaches one check to the rule; message methods apply to
//! the check attached last.

use crate::error::ValidatorError;
use crate::message::to_json;
use crate::rules::check::{AsText, Check, Emptiness, MessageSource, Presence};
use crate::rules::{FieldSelector, Rule};
use crate::types::CascadeMode;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

/// Builder for the checks of one freshly registered rule
pub struct RuleBuilder<'a, T, S> {
    rule: &'a mut Rule<T>,
    selector: Arc<S>,
}

impl<'a, T, S> RuleBuilder<'a, T, S>
where
    T: 'static,
    S: FieldSelector<T> + 'static,
{
    pub(crate) fn new(rule: &'a mut Rule<T>, selector: S) -> Self {
        Self {
            rule,
            selector: Arc::new(selector),
        }
    }

    /// Override the cascade mode the rule received from its severity
    pub fn cascade(self, mode: CascadeMode) -> Self {
        self.rule.set_cascade(mode);
        self
    }

    /// Attach a check on the field value
    pub fn must<F>(self, predicate: F) -> Self
    where
        F: Fn(&S::Value) -> bool + Send + Sync + 'static,
    {
        self.must_with(move |_, value| predicate(value))
    }

    /// Attach a check that sees both the instance and the field value
    pub fn must_with<F>(self, predicate: F) -> Self
    where
        F: Fn(&T, &S::Value) -> bool + Send + Sync + 'static,
    {
        self.attach(predicate, MessageSource::Empty)
    }

    /// Attach a check that the value is present
    pub fn not_null(self) -> Self
    where
        S::Value: Presence,
    {
        let message = format!("'{}' must not be null.", self.selector.name());
        self.attach(|_, value| value.is_present(), MessageSource::Text(message))
    }

    /// Attach a check that the value is not empty
    pub fn not_empty(self) -> Self
    where
        S::Value: Emptiness,
    {
        let message = format!("'{}' must not be empty.", self.selector.name());
        self.attach(
            |_, value| !value.is_empty_value(),
            MessageSource::Text(message),
        )
    }

    /// Attach a check that the value equals `expected`
    pub fn equal(self, expected: S::Value) -> Self
    where
        S::Value: PartialEq + Sized + Send + Sync + 'static,
    {
        let message = format!("'{}' has an unexpected value.", self.selector.name());
        self.attach(
            move |_, value| *value == expected,
            MessageSource::Text(message),
        )
    }

    /// Attach a check that the text matches `pattern`
    ///
    /// Absent values pass.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidArgument` if `pattern` does not compile.
    pub fn matches(self, pattern: &str) -> Result<Self, ValidatorError>
    where
        S::Value: AsText,
    {
        let regex = Regex::new(pattern).map_err(|e| {
            ValidatorError::InvalidArgument(format!(
                "Invalid pattern '{}' for field '{}': {}",
                pattern,
                self.selector.name(),
                e
            ))
        })?;
        let message = format!("'{}' is not in the correct format.", self.selector.name());

        Ok(self.attach(
            move |_, value| value.as_text().is_none_or(|text| regex.is_match(text)),
            MessageSource::Text(message),
        ))
    }

    /// Replace the message of the last attached check
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidState` if no check has been attached.
    pub fn with_message(self, message: impl Into<String>) -> Result<Self, ValidatorError> {
        self.replace_message(MessageSource::Text(message.into()))
    }

    /// Replace the message of the last attached check with one computed from the instance
    pub fn with_message_fn<F>(self, message: F) -> Result<Self, ValidatorError>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.replace_message(MessageSource::Dynamic(Box::new(message)))
    }

    /// Use a JSON snapshot of the instance as the message of the last check
    pub fn with_message_and_json(self) -> Result<Self, ValidatorError>
    where
        T: Serialize,
    {
        self.with_message_fn(|instance| to_json(Some(instance)))
    }

    /// Use `message` followed by a JSON snapshot of the instance
    pub fn with_message_and_json_text(
        self,
        message: impl Into<String>,
    ) -> Result<Self, ValidatorError>
    where
        T: Serialize,
    {
        let message = message.into();
        self.with_message_fn(move |instance| format!("{}\n{}", message, to_json(Some(instance))))
    }

    /// Use a computed message followed by a JSON snapshot of the instance
    pub fn with_message_and_json_fn<F>(self, message: F) -> Result<Self, ValidatorError>
    where
        T: Serialize,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.with_message_fn(move |instance| {
            format!("{}\n{}", message(instance), to_json(Some(instance)))
        })
    }

    fn attach<F>(self, predicate: F, message: MessageSource<T>) -> Self
    where
        F: Fn(&T, &S::Value) -> bool + Send + Sync + 'static,
    {
        let selector = Arc::clone(&self.selector);
        self.rule.push_check(Check::new(
            Box::new(move |instance: &T| predicate(instance, selector.read(instance))),
            message,
        ));
        self
    }

    fn replace_message(self, message: MessageSource<T>) -> Result<Self, ValidatorError> {
        match self.rule.last_check_mut() {
            Some(check) => check.set_message(message),
            None => {
                return Err(ValidatorError::InvalidState(format!(
                    "message set on '{}' before any check was attached",
                    self.selector.name()
                )));
            }
        }
        Ok(self)
    }
}
