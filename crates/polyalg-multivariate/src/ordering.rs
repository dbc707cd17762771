//! Monomial orderings on exponent tuples.
//!
//! Reduced polynomials list their terms from greatest to least under an
//! ordering, so the reduced form does not depend on input term order.

use std::cmp::Ordering;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two exponent tuples of equal length according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &[u32], b: &[u32]) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn total_degree(exps: &[u32]) -> u64 {
    exps.iter().map(|&e| u64::from(e)).sum()
}

fn cmp_lex(a: &[u32], b: &[u32]) -> Ordering {
    a.iter().cmp(b.iter())
}

fn cmp_grlex(a: &[u32], b: &[u32]) -> Ordering {
    total_degree(a)
        .cmp(&total_degree(b))
        .then_with(|| cmp_lex(a, b))
}

fn cmp_grevlex(a: &[u32], b: &[u32]) -> Ordering {
    total_degree(a).cmp(&total_degree(b)).then_with(|| {
        // Smaller exponent in the last differing variable wins
        a.iter()
            .rev()
            .zip(b.iter().rev())
            .map(|(x, y)| y.cmp(x))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
