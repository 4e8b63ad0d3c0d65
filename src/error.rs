//! Error types for formula evaluation and table generation.
//!
//! All contract violations are reported synchronously through [`LogicError`];
//! nothing is retried or silently swallowed, and no partial results are
//! returned on error.

use std::fmt;

/// An error raised when a formula or table operation violates its contract.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LogicError {
    /// `evaluate` was called with an assignment whose variable count differs
    /// from the formula's arity.
    ArityMismatch {
        /// The formula's arity.
        expected: usize,
        /// The number of variables in the supplied assignment.
        actual: usize,
    },

    /// A variable was supplied (or referenced by an appended formula) that is
    /// not among the enumerating formula's variables.
    UnknownVariable {
        /// The offending variable name.
        name: String,
    },

    /// Table generation was refused because `2^arity` rows would exceed the
    /// soft cap.
    TooManyVariables {
        /// The formula's arity.
        arity: usize,
        /// The maximum supported arity.
        max: usize,
    },
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::ArityMismatch { expected, actual } => {
                write!(
                    f,
                    "arity mismatch: formula has {} variable(s), assignment has {}",
                    expected, actual
                )
            }
            LogicError::UnknownVariable { name } => {
                write!(f, "unknown variable '{}'", name)
            }
            LogicError::TooManyVariables { arity, max } => {
                write!(
                    f,
                    "too many variables: arity {} exceeds the maximum of {} (2^{} rows)",
                    arity, max, arity
                )
            }
        }
    }
}

impl std::error::Error for LogicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LogicError::ArityMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "arity mismatch: formula has 2 variable(s), assignment has 3"
        );

        let err = LogicError::UnknownVariable {
            name: "x".to_string(),
        };
        assert_eq!(err.to_string(), "unknown variable 'x'");

        let err = LogicError::TooManyVariables { arity: 21, max: 20 };
        assert_eq!(
            err.to_string(),
            "too many variables: arity 21 exceeds the maximum of 20 (2^21 rows)"
        );
    }
}
