#![forbid(unsafe_code)]

//! Check primitives attached to rules
//!
//! A check is an opaque predicate over the whole instance plus the source of
//! the message reported when it fails. Rules only orchestrate checks; the
//! predicate logic belongs to whoever declares them.

use std::fmt;

/// Predicate evaluated against an instance; `true` means the check passed
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Produces a message from the instance that failed a check
pub type MessageFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Where a failure message comes from
pub enum MessageSource<T> {
    /// No message; failures carry an empty string
    Empty,
    /// A fixed message
    Text(String),
    /// A message computed from the failing instance
    Dynamic(MessageFn<T>),
}

impl<T> MessageSource<T> {
    /// Renders the message for `instance`
    pub fn render(&self, instance: &T) -> String {
        match self {
            MessageSource::Empty => String::new(),
            MessageSource::Text(text) => text.clone(),
            MessageSource::Dynamic(f) => f(instance),
        }
    }
}

impl<T> fmt::Debug for MessageSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSource::Empty => f.write_str("Empty"),
            MessageSource::Text(text) => f.debug_tuple("Text").field(text).finish(),
            MessageSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One check of a rule
pub struct Check<T> {
    predicate: Predicate<T>,
    message: MessageSource<T>,
}

impl<T> Check<T> {
    /// Creates a check from a predicate and its message source
    pub fn new(predicate: Predicate<T>, message: MessageSource<T>) -> Self {
        Self { predicate, message }
    }

    /// Returns true if `instance` passes the check
    pub fn passes(&self, instance: &T) -> bool {
        (self.predicate)(instance)
    }

    /// Renders the failure message for `instance`
    pub fn message_for(&self, instance: &T) -> String {
        self.message.render(instance)
    }

    pub(crate) fn set_message(&mut self, message: MessageSource<T>) {
        self.message = message;
    }
}

impl<T> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Values that can be absent, checked by `not_null`
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<U> Presence for Option<U> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// Values that can be empty, checked by `not_empty`
///
/// Strings consisting only of whitespace count as empty; an absent option is
/// empty.
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<U> Emptiness for Vec<U> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<U> Emptiness for [U] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<U: Emptiness> Emptiness for Option<U> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

/// String-like values, checked by `matches`
///
/// `None` means there is no text to test; such values pass pattern checks and
/// are left to `not_null`.
pub trait AsText {
    fn as_text(&self) -> Option<&str>;
}

impl AsText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<U: AsText> AsText for Option<U> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(AsText::as_text)
    }
}
