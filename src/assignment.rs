//! Evaluation environments.
//!
//! An [`Assignment`] maps variables to truth values. Insertion order is
//! preserved, so an assignment built from a truth-table row reads back in
//! column order.

use crate::types::Var;

/// An insertion-ordered mapping from variables to truth values.
///
/// Setting a variable that is already present overwrites its value in place
/// without changing its position.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    entries: Vec<(Var, bool)>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a variable, overwriting in place if already present.
    pub fn set(&mut self, var: Var, value: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(v, _)| *v == var) {
            entry.1 = value;
        } else {
            self.entries.push((var, value));
        }
    }

    /// Returns the value of the named variable, if present.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(v, _)| v.name() == name)
            .map(|&(_, value)| value)
    }

    /// Checks whether the assignment contains the given variable.
    pub fn contains(&self, var: &Var) -> bool {
        self.entries.iter().any(|(v, _)| v == var)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the assignment is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(variable, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, bool)> {
        self.entries.iter().map(|(v, value)| (v, *value))
    }
}

impl<const N: usize> From<[(&str, bool); N]> for Assignment {
    fn from(pairs: [(&str, bool); N]) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in pairs {
            assignment.set(Var::new(name), value);
        }
        assignment
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}
