//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored in ascending exponent order, so the term of
//! order `k` lives at index `k`. Every constructor trims trailing zero
//! coefficients, keeping the constant term even when it is zero.

use std::fmt;

use tracing::trace;

use crate::error::{PolyError, Result};
use crate::term::Term;

const DEFAULT_VARIABLE: &str = "x";

/// A dense univariate polynomial.
///
/// Operators never mutate their operands; each returns a freshly trimmed
/// polynomial that takes its display variable from the left operand.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<f64>,
    /// Name of the indeterminate, used only for display.
    var: String,
}

impl Polynomial {
    /// Creates a polynomial in `x` from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self::with_variable(coeffs, DEFAULT_VARIABLE)
    }

    /// Creates a polynomial displayed in terms of `var`.
    #[must_use]
    pub fn with_variable(mut coeffs: Vec<f64>, var: impl Into<String>) -> Self {
        trim(&mut coeffs);
        Self {
            coeffs,
            var: var.into(),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(vec![0.0])
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::new(vec![1.0])
    }

    /// Returns the name of the indeterminate.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.var
    }

    /// Returns the degree. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0.0
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficient of `x^k`, zero above the degree.
    #[must_use]
    pub fn coeff(&self, k: usize) -> f64 {
        self.coeffs.get(k).copied().unwrap_or(0.0)
    }

    /// Returns the term of order `k`, if `k <= degree`.
    #[must_use]
    pub fn term(&self, k: usize) -> Option<Term> {
        self.coeffs.get(k).map(|&c| Term::monomial(c, k))
    }

    /// Iterates over the terms in ascending order, one per exponent `0..=degree`.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = Term> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| Term::monomial(c, k))
    }

    /// Returns the leading term.
    #[must_use]
    pub fn lead(&self) -> Term {
        let degree = self.degree();
        Term::monomial(self.coeffs[degree], degree)
    }

    /// Evaluates the polynomial as the sum of its terms at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms().map(|t| t.evaluate(x)).sum()
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_aligned(other, |a, b| a + b)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_aligned(other, |a, b| a - b)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with_coeffs(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Multiplies every term by `term`, shifting the degree by its order.
    #[must_use]
    pub fn mul_term(&self, term: &Term) -> Self {
        if term.coef() == 0.0 {
            return self.with_coeffs(vec![0.0]);
        }

        let mut coeffs = vec![0.0; term.order()];
        coeffs.extend(self.terms().map(|t| t.mul(term).coef()));
        self.with_coeffs(coeffs)
    }

    /// Multiplies two polynomials by distributing each term of `other` across `self`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        other
            .terms()
            .fold(self.with_coeffs(vec![0.0]), |acc, term| {
                acc.add(&self.mul_term(&term))
            })
    }

    /// Long division, returning `(quotient, remainder)` with
    /// `self == quotient * other + remainder` and `deg(remainder) < deg(other)`
    /// unless the remainder is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is the zero polynomial.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        if other.is_zero() {
            return Err(PolyError::DivisionByZero);
        }

        let divisor_lead = other.lead();
        let mut quotient = self.with_coeffs(vec![0.0]);
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= other.degree() {
            let degree = remainder.degree();
            let t = remainder.lead().div(&divisor_lead)?;

            quotient = quotient.add(&t.to_polynomial());
            // Force exact cancellation of the leading coefficient
            remainder = remainder.sub(&other.mul_term(&t)).without_order(degree);

            trace!(quotient = %quotient, remainder = %remainder, "long division step");
        }

        Ok((quotient, remainder))
    }

    /// Computes the derivative. A constant differentiates to the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return self.with_coeffs(vec![0.0]);
        }

        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| c * k as f64)
            .collect();
        self.with_coeffs(coeffs)
    }

    /// Computes the antiderivative with zero constant of integration.
    #[must_use]
    pub fn integral(&self) -> Self {
        self.integral_with_constant(0.0)
    }

    /// Computes the antiderivative with constant of integration `c`.
    #[must_use]
    pub fn integral_with_constant(&self, c: f64) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(c);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(k, &a)| a / (k + 1) as f64),
        );
        self.with_coeffs(coeffs)
    }

    /// Builds a sibling polynomial in the same variable.
    fn with_coeffs(&self, coeffs: Vec<f64>) -> Self {
        Self::with_variable(coeffs, self.var.clone())
    }

    /// Combines coefficient-wise after padding copies of both operands to the same length.
    fn zip_aligned(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());

        let mut lhs = self.coeffs.clone();
        let mut rhs = other.coeffs.clone();
        lhs.resize(len, 0.0);
        rhs.resize(len, 0.0);

        let coeffs = lhs.into_iter().zip(rhs).map(|(a, b)| op(a, b)).collect();
        self.with_coeffs(coeffs)
    }

    /// Zeroes the coefficient of `x^k` and re-trims.
    fn without_order(mut self, k: usize) -> Self {
        if let Some(c) = self.coeffs.get_mut(k) {
            *c = 0.0;
            trim(&mut self.coeffs);
        }
        self
    }
}

/// Removes trailing zero coefficients, keeping at least the constant term.
fn trim(coeffs: &mut Vec<f64>) {
    while coeffs.len() > 1 && coeffs.last() == Some(&0.0) {
        coeffs.pop();
    }

    if coeffs.is_empty() {
        coeffs.push(0.0);
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        term.to_polynomial()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .terms()
            .rev()
            .map(|t| t.to_string_with_var(&self.var))
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
