//! Type-safe wrapper for propositional variables.
//!
//! A [`Var`] is a validated variable identifier. Using a newtype instead of
//! bare strings keeps assignment keys and formula variable lists honest.

use std::fmt;
use std::sync::Arc;

/// A propositional variable, identified by name.
///
/// Variables are cheap to clone (the name is reference-counted) and compare
/// by name.
///
/// # Invariants
///
/// - Variable names are non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(Arc<str>);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Variable names must be non-empty");
        Var(name)
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let p = Var::new("p");
        let q = Var::new("q");
        assert_eq!(p.name(), "p");
        assert_eq!(q.to_string(), "q");
        assert_ne!(p, q);
        assert_eq!(p, Var::from("p"));
    }

    #[test]
    #[should_panic(expected = "Variable names must be non-empty")]
    fn test_empty_name_panics() {
        Var::new("");
    }
}
