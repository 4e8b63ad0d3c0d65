//! Propositional formulas.
//!
//! A [`Formula`] is an immutable expression tree over named boolean
//! variables, built bottom-up from atoms via the connective methods. Each
//! composition records the stable self-first union of its operands' variable
//! sequences; the truth-table generator consumes that order to fix its
//! columns.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::assignment::Assignment;
use crate::error::LogicError;
use crate::table::TruthTable;
use crate::types::Var;

/// Soft cap on the number of distinct variables a table can enumerate.
///
/// Table generation is exhaustive (`2^arity` rows), so arity is practically
/// bounded; [`Formula::table`] fails fast above this cap.
pub const MAX_TABLE_VARS: usize = 20;

#[derive(Debug, Clone)]
enum Node {
    Atom(Var),
    Not(Arc<Formula>),
    And(Arc<Formula>, Arc<Formula>),
    Or(Arc<Formula>, Arc<Formula>),
    Implies(Arc<Formula>, Arc<Formula>),
    Equiv(Arc<Formula>, Arc<Formula>),
}

/// An immutable boolean expression.
///
/// Composing formulas never mutates the operands: every connective returns a
/// brand-new `Formula` holding shared references to its operand trees, so a
/// formula can participate in any number of compositions and comparisons.
#[derive(Debug, Clone)]
pub struct Formula {
    node: Node,
    variables: Vec<Var>,
}

/// Stable self-first union: `left`, then each of `right` not already present.
fn union(left: &[Var], right: &[Var]) -> Vec<Var> {
    let mut result = left.to_vec();
    for var in right {
        if !result.contains(var) {
            result.push(var.clone());
        }
    }
    result
}

impl Formula {
    /// Creates an atomic formula from a variable name.
    pub fn var(name: impl Into<Var>) -> Self {
        let var = name.into();
        Formula {
            variables: vec![var.clone()],
            node: Node::Atom(var),
        }
    }

    fn combine(
        &self,
        other: &Formula,
        make: impl FnOnce(Arc<Formula>, Arc<Formula>) -> Node,
    ) -> Formula {
        Formula {
            variables: union(&self.variables, &other.variables),
            node: make(Arc::new(self.clone()), Arc::new(other.clone())),
        }
    }

    /// Logical negation: `!f`.
    pub fn not_(&self) -> Formula {
        Formula {
            variables: self.variables.clone(),
            node: Node::Not(Arc::new(self.clone())),
        }
    }

    /// Logical conjunction: `f & g`.
    pub fn and(&self, other: &Formula) -> Formula {
        self.combine(other, Node::And)
    }

    /// Logical disjunction: `f | g`.
    pub fn or(&self, other: &Formula) -> Formula {
        self.combine(other, Node::Or)
    }

    /// Material implication: `f -> g`.
    pub fn implies(&self, other: &Formula) -> Formula {
        self.combine(other, Node::Implies)
    }

    /// Logical equivalence: `f <-> g`.
    pub fn equiv(&self, other: &Formula) -> Formula {
        self.combine(other, Node::Equiv)
    }

    /// The formula's free variables, in declared (first-seen) order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// The number of distinct free variables.
    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    /// Checks whether this formula is a bare atom.
    ///
    /// False for every composite, even when the arity stays 1 (e.g. `!p`).
    pub fn is_atomic(&self) -> bool {
        matches!(self.node, Node::Atom(_))
    }

    /// Evaluates the formula under the given assignment.
    ///
    /// The assignment must cover exactly the formula's free variables:
    /// a differing variable count is an [`LogicError::ArityMismatch`], and a
    /// variable outside the formula's set is an
    /// [`LogicError::UnknownVariable`].
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        if assignment.len() != self.arity() {
            return Err(LogicError::ArityMismatch {
                expected: self.arity(),
                actual: assignment.len(),
            });
        }
        for (var, _) in assignment.iter() {
            if !self.variables.contains(var) {
                return Err(LogicError::UnknownVariable {
                    name: var.name().to_string(),
                });
            }
        }
        Ok(self.eval_inner(assignment))
    }

    fn eval_inner(&self, assignment: &Assignment) -> bool {
        match &self.node {
            Node::Atom(var) => assignment
                .get(var.name())
                .expect("assignment covers all free variables"),
            Node::Not(f) => !f.eval_inner(assignment),
            Node::And(f, g) => {
                let (a, b) = Self::eval_operands(f, g, assignment);
                a && b
            }
            Node::Or(f, g) => {
                let (a, b) = Self::eval_operands(f, g, assignment);
                a || b
            }
            Node::Implies(f, g) => {
                let (a, b) = Self::eval_operands(f, g, assignment);
                !a || b
            }
            Node::Equiv(f, g) => {
                let (a, b) = Self::eval_operands(f, g, assignment);
                (a && b) || (!a && !b)
            }
        }
    }

    /// Partitions the assignment into each operand's variable subset and
    /// evaluates both sides. A variable shared by both operands lands in
    /// both partitions.
    fn eval_operands(left: &Formula, right: &Formula, assignment: &Assignment) -> (bool, bool) {
        let mut left_args = Assignment::new();
        let mut right_args = Assignment::new();
        for (var, value) in assignment.iter() {
            if left.variables.contains(var) {
                left_args.set(var.clone(), value);
            }
            if right.variables.contains(var) {
                right_args.set(var.clone(), value);
            }
        }
        (left.eval_inner(&left_args), right.eval_inner(&right_args))
    }

    /// Generates the full truth table for this formula.
    ///
    /// Fails with [`LogicError::TooManyVariables`] when the arity exceeds
    /// [`MAX_TABLE_VARS`].
    pub fn table(&self) -> Result<TruthTable, LogicError> {
        TruthTable::generate(self)
    }

    /// Checks semantic equivalence against another formula.
    ///
    /// Enumeration is driven by `self`'s variables, so `other` may only use
    /// a subset of them; a variable outside that set is an
    /// [`LogicError::UnknownVariable`]. The check is asymmetric for that
    /// reason.
    pub fn is_equivalent(&self, other: &Formula) -> Result<bool, LogicError> {
        debug!("is_equivalent({}, {})", self, other);
        let mut table = self.table()?;
        table.add_column(other)?;
        Ok(table.column(-2) == table.column(-1))
    }

    /// Checks whether the formula is true under every assignment.
    pub fn is_tautology(&self) -> Result<bool, LogicError> {
        debug!("is_tautology({})", self);
        let table = self.table()?;
        Ok(table.column(-1).iter().all(|&bit| bit == 1))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operands are parenthesized iff they are not atomic.
        fn operand(f: &mut fmt::Formatter<'_>, g: &Formula) -> fmt::Result {
            if g.is_atomic() {
                write!(f, "{}", g)
            } else {
                write!(f, "({})", g)
            }
        }
        match &self.node {
            Node::Atom(var) => write!(f, "{}", var),
            Node::Not(g) => {
                write!(f, "!")?;
                operand(f, g)
            }
            Node::And(l, r) => {
                operand(f, l)?;
                write!(f, " & ")?;
                operand(f, r)
            }
            Node::Or(l, r) => {
                operand(f, l)?;
                write!(f, " | ")?;
                operand(f, r)
            }
            Node::Implies(l, r) => {
                operand(f, l)?;
                write!(f, " -> ")?;
                operand(f, r)
            }
            Node::Equiv(l, r) => {
                operand(f, l)?;
                write!(f, " <-> ")?;
                operand(f, r)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_atomic_evaluation() {
        let p = Formula::var("p");
        assert!(p.is_atomic());
        assert_eq!(p.arity(), 1);
        assert_eq!(p.evaluate(&Assignment::from([("p", true)])), Ok(true));
        assert_eq!(p.evaluate(&Assignment::from([("p", false)])), Ok(false));
    }

    #[test]
    fn test_negation_keeps_arity_but_not_atomic() {
        let p = Formula::var("p");
        let np = p.not_();
        assert_eq!(np.arity(), 1);
        assert!(!np.is_atomic());
        assert_eq!(np.evaluate(&Assignment::from([("p", true)])), Ok(false));
    }

    #[test]
    fn test_variable_union_is_stable_self_first() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let r = Formula::var("r");
        let f = p.or(&q).and(&q.or(&r));
        let names: Vec<&str> = f.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["p", "q", "r"]);
        assert_eq!(f.arity(), 3);
    }

    #[test]
    fn test_shared_variable_counted_once() {
        let p = Formula::var("p");
        let f = p.and(&p.not_());
        assert_eq!(f.arity(), 1);
        assert_eq!(f.evaluate(&Assignment::from([("p", true)])), Ok(false));
        assert_eq!(f.evaluate(&Assignment::from([("p", false)])), Ok(false));
    }

    #[test]
    fn test_display() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let s = Formula::var("s");
        assert_eq!(p.to_string(), "p");
        assert_eq!(p.not_().to_string(), "!p");
        assert_eq!(p.not_().not_().to_string(), "!(!p)");
        assert_eq!(p.or(&q).to_string(), "p | q");
        assert_eq!(q.not_().or(&s).to_string(), "(!q) | s");
        assert_eq!(p.implies(&q.not_().or(&s)).to_string(), "p -> ((!q) | s)");
        assert_eq!(p.equiv(&q).to_string(), "p <-> q");
        assert_eq!(
            p.and(&q).equiv(&q.and(&p)).to_string(),
            "(p & q) <-> (q & p)"
        );
    }

    #[test]
    fn test_connective_truth_functions() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let cases = [
            (true, true),
            (true, false),
            (false, true),
            (false, false),
        ];
        for (a, b) in cases {
            let x = Assignment::from([("p", a), ("q", b)]);
            assert_eq!(p.or(&q).evaluate(&x), Ok(a || b));
            assert_eq!(p.and(&q).evaluate(&x), Ok(a && b));
            assert_eq!(p.implies(&q).evaluate(&x), Ok(!a || b));
            assert_eq!(p.equiv(&q).evaluate(&x), Ok(a == b));
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = p.and(&q);
        let err = f.evaluate(&Assignment::from([("p", true)]));
        assert_eq!(
            err,
            Err(LogicError::ArityMismatch {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_unknown_variable() {
        let p = Formula::var("p");
        let err = p.evaluate(&Assignment::from([("q", true)]));
        assert_eq!(
            err,
            Err(LogicError::UnknownVariable {
                name: "q".to_string(),
            })
        );
    }

    #[test]
    fn test_de_morgan() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let lhs = p.and(&q).not_();
        let rhs = p.not_().or(&q.not_());
        assert_eq!(lhs.is_equivalent(&rhs), Ok(true));
    }

    #[test]
    fn test_double_negation() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = p.implies(&q).and(&q.equiv(&p));
        assert_eq!(f.not_().not_().is_equivalent(&f), Ok(true));
    }

    #[test]
    fn test_tautology_and_contradiction() {
        let p = Formula::var("p");
        assert_eq!(p.or(&p.not_()).is_tautology(), Ok(true));
        assert_eq!(p.is_tautology(), Ok(false));

        let contradiction = p.and(&p.not_());
        let table = contradiction.table().unwrap();
        assert!(table.column(-1).iter().all(|&bit| bit == 0));
    }

    #[test]
    fn test_concrete_scenario() {
        // (p -> (!q | s)) & (!s -> r) at p=1, q=0, r=1, s=1.
        let p = Formula::var("p");
        let q = Formula::var("q");
        let r = Formula::var("r");
        let s = Formula::var("s");
        let f = p.implies(&q.not_().or(&s)).and(&s.not_().implies(&r));
        assert_eq!(f.to_string(), "(p -> ((!q) | s)) & ((!s) -> r)");
        let names: Vec<&str> = f.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["p", "q", "s", "r"]);

        let x = Assignment::from([("p", true), ("q", false), ("r", true), ("s", true)]);
        assert_eq!(f.evaluate(&x), Ok(true));
    }

    #[test]
    fn test_contraposition_family() {
        // main = !(p -> r) -> !q is equivalent to q -> (p -> r) and to
        // (p -> r) | !q, but not to the other candidate forms.
        let p = Formula::var("p");
        let q = Formula::var("q");
        let r = Formula::var("r");
        let main = p.implies(&r).not_().implies(&q.not_());
        let a = q.implies(&p.implies(&r));
        let b = p.implies(&r).and(&q.not_());
        let c = p.implies(&r).or(&q);
        let d = p.implies(&r).or(&q.not_());
        let e = q.not_().implies(&p.implies(&r).not_());

        assert_eq!(main.is_equivalent(&a), Ok(true));
        assert_eq!(main.is_equivalent(&b), Ok(false));
        assert_eq!(main.is_equivalent(&c), Ok(false));
        assert_eq!(main.is_equivalent(&d), Ok(true));
        assert_eq!(main.is_equivalent(&e), Ok(false));
    }

    #[test]
    fn test_equivalence_is_asymmetric_on_variables() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        // q's variable is outside p's set, so enumeration driven by p fails.
        let err = p.is_equivalent(&p.and(&q));
        assert_eq!(
            err,
            Err(LogicError::UnknownVariable {
                name: "q".to_string(),
            })
        );
        // The other direction enumerates {p, q} and succeeds.
        assert_eq!(p.and(&q).is_equivalent(&p), Ok(false));
    }
}
