//! # prop-rs: Propositional Logic in Rust
//!
//! **`prop-rs`** is a small, safe toolkit for **propositional-logic formulas**:
//! build boolean expressions out of named variables and connectives, render
//! them as parenthesized text, evaluate them under an assignment, and
//! enumerate full **truth tables** for equivalence and tautology checking.
//!
//! ## What is a Formula?
//!
//! A formula is an immutable expression tree over atomic variables, composed
//! with the connectives NOT (`!`), AND (`&`), OR (`|`), IMPLIES (`->`), and
//! EQUIV (`<->`). Every composition records the stable self-first union of
//! its operands' variable sequences, which later fixes the truth table's
//! column order.
//!
//! ## Key Features
//!
//! - **Immutable Trees**: Connectives never mutate their operands; a formula
//!   can be reused in any number of compositions and checks.
//! - **Exhaustive Tables**: [`Formula::table`][crate::formula::Formula::table]
//!   enumerates all `2^arity` assignments in a fixed deterministic order.
//! - **Semantic Checks**: Row-aligned column comparison powers
//!   [`is_equivalent`][crate::formula::Formula::is_equivalent] and
//!   [`is_tautology`][crate::formula::Formula::is_tautology].
//! - **Explicit Contracts**: Arity and variable-set violations surface as
//!   [`LogicError`][crate::error::LogicError] values, never as silent
//!   defaults.
//!
//! ## Basic Usage
//!
//! ```rust
//! use prop_rs::assignment::Assignment;
//! use prop_rs::formula::Formula;
//!
//! // 1. Create atomic formulas
//! let p = Formula::var("p");
//! let q = Formula::var("q");
//!
//! // 2. Compose: f = p -> (!q)
//! let f = p.implies(&q.not_());
//! assert_eq!(f.to_string(), "p -> (!q)");
//!
//! // 3. Evaluate under an assignment
//! let x = Assignment::from([("p", true), ("q", false)]);
//! assert_eq!(f.evaluate(&x), Ok(true));
//!
//! // 4. Check properties
//! assert_eq!(p.or(&p.not_()).is_tautology(), Ok(true));
//! assert_eq!(f.is_equivalent(&q.implies(&p)), Ok(false));
//!
//! // 5. Inspect the full table
//! let table = f.table().unwrap();
//! assert_eq!(table.num_rows(), 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: The heart of the library. Contains
//!   [`Formula`][crate::formula::Formula] and the connective operations.
//! - **[`table`]**: Truth-table generation and column comparison.
//! - **[`assignment`]**: Ordered variable-to-value environments.
//! - **[`ops`]**: Operator overloading (`!`, `&`, `|`, `%`) for terse
//!   formula construction.

pub mod assignment;
pub mod error;
pub mod formula;
pub mod ops;
pub mod table;
pub mod types;
