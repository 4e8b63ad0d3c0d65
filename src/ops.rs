//! Operator sugar for building formulas.
//!
//! `!f` negates, `f & g` conjoins, `f | g` disjoins, and `f % g` builds an
//! equivalence (there is no overloadable `<->` operator, so `%` stands in).
//! Implication has no natural operator and stays a method call.

use std::ops::{BitAnd, BitOr, Not, Rem};

use crate::formula::Formula;

impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        self.not_()
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        self.not_()
    }
}

impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        self.and(&rhs)
    }
}

impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        self.or(&rhs)
    }
}

impl Rem for &Formula {
    type Output = Formula;

    fn rem(self, rhs: &Formula) -> Formula {
        self.equiv(rhs)
    }
}

impl Rem for Formula {
    type Output = Formula;

    fn rem(self, rhs: Formula) -> Formula {
        self.equiv(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_not_operator() {
        let p = Formula::var("p");
        assert_eq!((!&p).to_string(), "!p");
        assert_eq!((!p).to_string(), "!p");
    }

    #[test]
    fn test_and_operator() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = &p & &q;
        assert_eq!(f.to_string(), "p & q");
        assert_eq!(f.is_equivalent(&p.and(&q)), Ok(true));
    }

    #[test]
    fn test_or_operator() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = &p | &q;
        assert_eq!(f.to_string(), "p | q");
        assert_eq!(f.is_equivalent(&p.or(&q)), Ok(true));
    }

    #[test]
    fn test_equiv_operator() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = &p % &q;
        assert_eq!(f.to_string(), "p <-> q");
        assert_eq!(f.is_equivalent(&p.equiv(&q)), Ok(true));
    }

    #[test]
    fn test_operators_compose() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = !(&p & &q);
        let g = !&p | !&q;
        assert_eq!(f.is_equivalent(&g), Ok(true));
    }
}
