//! Ordered variable bases shared by the terms of a polynomial.

use std::fmt;
use std::sync::Arc;

/// An ordered tuple of variable names.
///
/// The position of a name fixes which exponent slot it owns. Clones share
/// the same allocation; equality compares names in order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Basis(Arc<[String]>);

impl Basis {
    /// Creates a basis from variable names in slot order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the basis has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the variable names in slot order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns the slot of `name`, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}
