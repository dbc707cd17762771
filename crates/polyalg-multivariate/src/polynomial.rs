//! Multivariate polynomials over a shared variable basis.
//!
//! A polynomial built from raw term data may contain like terms and zero
//! coefficients. [`GPolynomial::reduce`] collates it into canonical form:
//! one term per exponent tuple, no zero coefficients, terms sorted in
//! descending [`MonomialOrder::Grevlex`]. Every arithmetic operator returns
//! a reduced result.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::basis::Basis;
use crate::error::{MultiError, Result};
use crate::ordering::MonomialOrder;
use crate::parser::{self, TermData};
use crate::term::{Exponents, GTerm};

/// A multivariate polynomial: a list of terms sharing one basis.
#[derive(Clone, PartialEq, Debug)]
pub struct GPolynomial {
    terms: Vec<GTerm>,
    basis: Basis,
}

impl GPolynomial {
    /// Builds a polynomial from raw term data, without reducing it.
    ///
    /// # Errors
    ///
    /// Fails if any term has a negative exponent or the wrong number of exponents.
    pub fn new(terms_data: &[TermData], basis: Basis) -> Result<Self> {
        let terms = terms_data
            .iter()
            .map(|data| GTerm::new(data.coefficient, &data.exponents, basis.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { terms, basis })
    }

    /// Builds a polynomial from existing terms, without reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::BasisMismatch`] if a term is over a different basis.
    pub fn from_terms(terms: Vec<GTerm>, basis: Basis) -> Result<Self> {
        if let Some(term) = terms.iter().find(|t| *t.basis() != basis) {
            return Err(MultiError::BasisMismatch {
                left: basis,
                right: term.basis().clone(),
            });
        }
        Ok(Self { terms, basis })
    }

    /// Parses an expression such as `"5*x^2*y + -1*y*z^3"`.
    ///
    /// The basis lists variables in order of first appearance. The result
    /// is not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::Parse`] for malformed input and
    /// [`MultiError::NegativeExponent`] for negative powers.
    pub fn parse(input: &str) -> Result<Self> {
        let (terms_data, basis) = parser::parse(input)?;
        Self::new(&terms_data, basis)
    }

    /// Creates the zero polynomial over `basis`.
    #[must_use]
    pub fn zero(basis: Basis) -> Self {
        Self {
            terms: Vec::new(),
            basis,
        }
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[GTerm] {
        &self.terms
    }

    /// Returns the variable basis.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.coef() == 0.0)
    }

    /// Returns the maximum total degree over all terms, 0 if there are none.
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.terms.iter().map(GTerm::degree).max().unwrap_or(0)
    }

    /// Returns the greatest stored term under `order`.
    #[must_use]
    pub fn leading_term(&self, order: MonomialOrder) -> Option<&GTerm> {
        self.terms
            .iter()
            .max_by(|a, b| order.compare(a.exponents(), b.exponents()))
    }

    /// Evaluates the polynomial at a point aligned with the basis.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::ArityMismatch`] if `values` does not match the basis.
    pub fn evaluate(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.basis.len() {
            return Err(MultiError::ArityMismatch {
                expected: self.basis.len(),
                found: values.len(),
            });
        }
        self.terms.iter().map(|t| t.evaluate(values)).sum()
    }

    /// Collates like terms into canonical form.
    ///
    /// Coefficients of equal exponent tuples are summed in ascending order of
    /// value, so the result does not depend on the order of the input terms.
    /// Zero sums are dropped and the survivors are sorted in descending
    /// [`MonomialOrder::Grevlex`]. Reducing twice gives the same polynomial.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let mut groups: FxHashMap<Exponents, Vec<f64>> = FxHashMap::default();
        for term in &self.terms {
            let exponents: Exponents = term.exponents().iter().copied().collect();
            groups.entry(exponents).or_default().push(term.coef());
        }

        let folded = groups.into_iter().map(|(exponents, mut coefs)| {
            coefs.sort_by(f64::total_cmp);
            (exponents, coefs.into_iter().sum::<f64>())
        });

        let order = MonomialOrder::default();
        let mut terms: Vec<GTerm> = folded
            .filter(|&(_, coef)| coef != 0.0)
            .map(|(exponents, coef)| GTerm::from_parts(coef, exponents, self.basis.clone()))
            .collect();
        terms.sort_by(|a, b| order.compare(b.exponents(), a.exponents()));

        trace!(before = self.terms.len(), after = terms.len(), "reduced polynomial");

        Self {
            terms,
            basis: self.basis.clone(),
        }
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(GTerm::neg).collect(),
            basis: self.basis.clone(),
        }
    }

    /// Adds two polynomials over the same basis.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::BasisMismatch`] if the bases differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_basis(&other.basis)?;
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Ok(Self {
            terms,
            basis: self.basis.clone(),
        }
        .reduce())
    }

    /// Subtracts two polynomials over the same basis.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::BasisMismatch`] if the bases differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_basis(&other.basis)?;
        self.add(&other.neg())
    }

    /// Multiplies every term by `term`.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::BasisMismatch`] if `term` is over a different basis and
    /// [`MultiError::ExponentOverflow`] if a product exponent exceeds `u32::MAX`.
    pub fn mul_term(&self, term: &GTerm) -> Result<Self> {
        self.check_basis(term.basis())?;
        Ok(Self {
            terms: self
                .terms
                .iter()
                .map(|t| t.mul(term))
                .collect::<Result<Vec<_>>>()?,
            basis: self.basis.clone(),
        }
        .reduce())
    }

    /// Multiplies two polynomials by distributing each term of `other` across `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::BasisMismatch`] if the bases differ and
    /// [`MultiError::ExponentOverflow`] if a product exponent exceeds `u32::MAX`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_basis(&other.basis)?;
        other
            .terms
            .iter()
            .try_fold(Self::zero(self.basis.clone()), |acc, term| {
                acc.add(&self.mul_term(term)?)
            })
    }

    fn check_basis(&self, other: &Basis) -> Result<()> {
        if self.basis == *other {
            Ok(())
        } else {
            Err(MultiError::BasisMismatch {
                left: self.basis.clone(),
                right: other.clone(),
            })
        }
    }
}

impl fmt::Display for GPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> Basis {
        Basis::new(["x", "y", "z"])
    }

    fn data(coefficient: f64, exponents: &[i64]) -> TermData {
        TermData {
            coefficient,
            exponents: exponents.to_vec(),
        }
    }

    #[test]
    fn test_new_validates_terms() {
        let err = GPolynomial::new(&[data(1.0, &[1, 0, -1])], xyz()).unwrap_err();
        assert_eq!(
            err,
            MultiError::NegativeExponent {
                index: 2,
                exponent: -1
            }
        );
    }

    #[test]
    fn test_from_terms_checks_basis() {
        let t = GTerm::new(1.0, &[1, 0], Basis::new(["x", "y"])).unwrap();
        assert!(matches!(
            GPolynomial::from_terms(vec![t], Basis::new(["y", "x"])),
            Err(MultiError::BasisMismatch { .. })
        ));
    }

    #[test]
    fn test_evaluate() {
        // 5x^2y - yz^3 at (1, 2, 3)
        let p = GPolynomial::new(
            &[data(5.0, &[2, 1, 0]), data(-1.0, &[0, 1, 3])],
            xyz(),
        )
        .unwrap();
        assert_eq!(p.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 10.0 - 54.0);
        assert!(p.evaluate(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_reduce() {
        let p = GPolynomial::new(
            &[
                data(5.0, &[2, 1, 0]),
                data(-1.0, &[0, 1, 3]),
                data(6.0, &[2, 1, 0]),
                data(2.0, &[1, 0, 0]),
                data(-2.0, &[1, 0, 0]),
            ],
            xyz(),
        )
        .unwrap();

        let r = p.reduce();
        assert_eq!(r.len(), 2);
        assert_eq!(r.to_string(), "-1*y*z^3 + 11*x^2*y");
        assert_eq!(r.reduce(), r);
        // Source is untouched
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_reduce_ignores_input_order() {
        let a = GPolynomial::new(
            &[data(1.0, &[1, 0, 0]), data(2.0, &[0, 1, 0]), data(3.0, &[1, 0, 0])],
            xyz(),
        )
        .unwrap();
        let b = GPolynomial::new(
            &[data(3.0, &[1, 0, 0]), data(1.0, &[1, 0, 0]), data(2.0, &[0, 1, 0])],
            xyz(),
        )
        .unwrap();
        assert_eq!(a.reduce(), b.reduce());
    }

    #[test]
    fn test_reduce_sum_is_order_independent() {
        let x = Basis::new(["x"]);
        let reduced = |coefs: &[f64]| {
            let terms: Vec<TermData> = coefs.iter().map(|&c| data(c, &[1])).collect();
            GPolynomial::new(&terms, x.clone()).unwrap().reduce()
        };

        // Cancellation that depends on summation order
        let a = reduced(&[1e16, 1.0, -1e16]);
        assert_eq!(a, reduced(&[1e16, -1e16, 1.0]));
        assert_eq!(a, reduced(&[1.0, -1e16, 1e16]));

        // Rounding that depends on summation order
        assert_eq!(reduced(&[0.1, 0.2, 0.3]), reduced(&[0.3, 0.2, 0.1]));
        assert_eq!(reduced(&[0.1, 0.2, 0.3]), reduced(&[0.2, 0.3, 0.1]));
    }

    #[test]
    fn test_add_sub() {
        let p = GPolynomial::parse("x^2 + 2*x*y").unwrap();
        let q = GPolynomial::parse("3*x^2 + -2*x*y").unwrap();

        assert_eq!(p.add(&q).unwrap().to_string(), "4*x^2");
        assert_eq!(p.sub(&p).unwrap(), GPolynomial::zero(p.basis().clone()));
        assert_eq!(p.sub(&q).unwrap().to_string(), "-2*x^2 + 4*x*y");
        // Operands are untouched
        assert_eq!(q.terms()[1].coef(), -2.0);
    }

    #[test]
    fn test_basis_mismatch() {
        let p = GPolynomial::parse("x + y").unwrap();
        let q = GPolynomial::parse("y + x").unwrap();
        let err = p.add(&q).unwrap_err();
        assert_eq!(
            err,
            MultiError::BasisMismatch {
                left: Basis::new(["x", "y"]),
                right: Basis::new(["y", "x"]),
            }
        );
        assert!(p.sub(&q).is_err());
        assert!(p.mul(&q).is_err());
    }

    #[test]
    fn test_mul_term() {
        let p = GPolynomial::parse("x + y").unwrap();
        let t = GTerm::new(2.0, &[1, 1], p.basis().clone()).unwrap();
        assert_eq!(p.mul_term(&t).unwrap().to_string(), "2*x^2*y + 2*x*y^2");

        let foreign = GTerm::new(2.0, &[1], Basis::new(["x"])).unwrap();
        assert!(p.mul_term(&foreign).is_err());
    }

    #[test]
    fn test_mul_exponent_overflow() {
        let basis = Basis::new(["x"]);
        let max = i64::from(u32::MAX);
        let p = GPolynomial::new(&[data(1.0, &[max]), data(1.0, &[0])], basis.clone()).unwrap();
        let err = MultiError::ExponentOverflow {
            index: 0,
            exponent: 2 * max,
        };

        assert_eq!(p.mul(&p), Err(err.clone()));
        let t = GTerm::new(3.0, &[max], basis).unwrap();
        assert_eq!(p.mul_term(&t), Err(err));
    }

    #[test]
    fn test_mul() {
        // (x + y)(x - y) = x^2 - y^2
        let p = GPolynomial::parse("x + y").unwrap();
        let q = GPolynomial::parse("x - y").unwrap();
        let product = p.mul(&q).unwrap();
        assert_eq!(product.to_string(), "1*x^2 + -1*y^2");
        assert_eq!(product.evaluate(&[3.0, 2.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_degree_and_leading_term() {
        let p = GPolynomial::parse("x*y^3 + x^2 + 7").unwrap();
        assert_eq!(p.degree(), 4);
        assert_eq!(
            p.leading_term(MonomialOrder::Lex).map(GTerm::exponents),
            Some(&[2u32, 0][..])
        );
        assert_eq!(
            p.leading_term(MonomialOrder::Grevlex).map(GTerm::exponents),
            Some(&[1u32, 3][..])
        );
        assert_eq!(GPolynomial::zero(Basis::new(["x"])).degree(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(GPolynomial::zero(xyz()).to_string(), "0");
        let p = GPolynomial::parse("5*x^2*y+-1*y*z^3+6*x^2*y").unwrap();
        assert_eq!(p.to_string(), "5*x^2*y + -1*y*z^3 + 6*x^2*y");
    }
}
