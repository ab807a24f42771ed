#![forbid(unsafe_code)]

//! Field selectors: naming a field of a target type and reading its value

use std::fmt;

/// Identifies one field of `T` and reads its value
///
/// The name labels every failure produced by rules on the field.
pub trait FieldSelector<T>: Send + Sync {
    /// Type of the selected value
    type Value: ?Sized;

    /// Returns the name used to label failures
    fn name(&self) -> &str;

    /// Reads the selected value from `instance`
    fn read<'a>(&self, instance: &'a T) -> &'a Self::Value;
}

/// A field selector backed by a plain accessor function
///
/// ```
/// use severity_validator::rules::{Field, FieldSelector};
///
/// struct Order {
///     reference: Option<String>,
/// }
///
/// let reference = Field::new("Reference", |o: &Order| &o.reference);
/// let order = Order { reference: None };
/// assert_eq!(reference.name(), "Reference");
/// assert!(reference.read(&order).is_none());
/// ```
pub struct Field<T, V: ?Sized> {
    name: String,
    accessor: fn(&T) -> &V,
}

impl<T, V: ?Sized> Field<T, V> {
    /// Creates a selector named `name` that reads through `accessor`
    pub fn new(name: impl Into<String>, accessor: fn(&T) -> &V) -> Self {
        Self {
            name: name.into(),
            accessor,
        }
    }
}

impl<T, V: ?Sized> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: self.accessor,
        }
    }
}

impl<T, V: ?Sized> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

impl<T, V: ?Sized> FieldSelector<T> for Field<T, V> {
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn read<'a>(&self, instance: &'a T) -> &'a V {
        (self.accessor)(instance)
    }
}
