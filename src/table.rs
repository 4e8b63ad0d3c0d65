//! Truth tables.
//!
//! A [`TruthTable`] is a snapshot: one row per assignment over the generating
//! formula's variables, each row holding the assignment bits in declared
//! variable order followed by one result bit per evaluated formula. Extra
//! formulas can be appended as trailing columns for row-aligned comparison.

use std::fmt;

use log::debug;

use crate::assignment::Assignment;
use crate::error::LogicError;
use crate::formula::{Formula, MAX_TABLE_VARS};
use crate::types::Var;

/// The exhaustive enumeration of a formula's value over all assignments.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    headers: Vec<String>,
    rows: Vec<Vec<u8>>,
}

impl TruthTable {
    /// Generates the table for `formula`, one row per assignment.
    ///
    /// Rows are produced for `k = 0 .. 2^n - 1` from a cumulative toggle
    /// state, initially all-0: bit `j` flips whenever `k mod 2^j == 0`,
    /// before being recorded, so position 0 toggles every row, position 1
    /// every 2nd row, position 2 every 4th. The finished sequence is stored
    /// in reverse generation order.
    pub(crate) fn generate(formula: &Formula) -> Result<Self, LogicError> {
        let n = formula.arity();
        if n > MAX_TABLE_VARS {
            return Err(LogicError::TooManyVariables {
                arity: n,
                max: MAX_TABLE_VARS,
            });
        }
        debug!("generate(formula = {}, arity = {})", formula, n);

        let variables = formula.variables().to_vec();
        let depth = 1usize << n;
        let mut state = vec![0u8; n];
        let mut rows = Vec::with_capacity(depth);
        for k in 0..depth {
            let mut assignment = Assignment::new();
            for (j, var) in variables.iter().enumerate() {
                if k % (1usize << j) == 0 {
                    state[j] ^= 1;
                }
                assignment.set(var.clone(), state[j] == 1);
            }
            let result = formula.evaluate(&assignment)?;
            let mut row = state.clone();
            row.push(result as u8);
            rows.push(row);
        }
        rows.reverse();

        Ok(TruthTable {
            variables,
            headers: vec![formula.to_string()],
            rows,
        })
    }

    /// The generating formula's variables, fixing the column order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// The number of assignment columns.
    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    /// Display headers of the result columns, in evaluation order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The stored rows: assignment bits in variable order, then result bits.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The number of rows (`2^arity`).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The total number of columns (assignment bits plus result bits).
    pub fn num_columns(&self) -> usize {
        self.arity() + self.headers.len()
    }

    /// Evaluates `formula` on every row's assignment and appends the results
    /// as a trailing column, headed by the formula's display text.
    ///
    /// The formula may only use variables of this table (a subset is fine:
    /// each row's assignment is restricted to the formula's own variables);
    /// anything else is an [`LogicError::UnknownVariable`].
    pub fn add_column(&mut self, formula: &Formula) -> Result<(), LogicError> {
        debug!("add_column(formula = {})", formula);
        for var in formula.variables() {
            if !self.variables.contains(var) {
                return Err(LogicError::UnknownVariable {
                    name: var.name().to_string(),
                });
            }
        }
        let mut bits = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let assignment: Assignment = formula
                .variables()
                .iter()
                .map(|var| {
                    let j = self
                        .variables
                        .iter()
                        .position(|v| v == var)
                        .expect("formula variables are a subset of table variables");
                    (var.clone(), row[j] == 1)
                })
                .collect();
            bits.push(formula.evaluate(&assignment)? as u8);
        }
        for (row, bit) in self.rows.iter_mut().zip(bits) {
            row.push(bit);
        }
        self.headers.push(formula.to_string());
        Ok(())
    }

    /// Returns a column as bits, row order preserved.
    ///
    /// Negative indices count from the end: `-1` is the most recently
    /// appended column, or the original result column if none was appended.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn column(&self, index: isize) -> Vec<u8> {
        let width = self.num_columns() as isize;
        let resolved = if index < 0 { index + width } else { index };
        assert!(
            (0..width).contains(&resolved),
            "column index {} out of range for {} columns",
            index,
            width
        );
        let resolved = resolved as usize;
        self.rows.iter().map(|row| row[resolved]).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self
            .variables
            .iter()
            .map(|v| v.name())
            .chain(self.headers.iter().map(|h| h.as_str()))
            .collect();
        for (i, header) in headers.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{}", header)?;
        }
        for row in &self.rows {
            writeln!(f)?;
            for (i, (bit, header)) in row.iter().zip(&headers).enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", bit, width = header.len())?;
            }
        }
        Ok(())
    }
}
