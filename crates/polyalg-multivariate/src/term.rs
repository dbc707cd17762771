//! Multivariate monomials `coef * v1^e1 * v2^e2 * ...`.

use std::fmt;

use smallvec::SmallVec;

use crate::basis::Basis;
use crate::error::{MultiError, Result};

/// Exponent tuple, one slot per basis variable.
pub type Exponents = SmallVec<[u32; 4]>;

/// A multivariate monomial over a fixed variable basis.
///
/// Two terms are like terms iff their exponent tuples are equal slot by slot.
#[derive(Clone, PartialEq, Debug)]
pub struct GTerm {
    coef: f64,
    exponents: Exponents,
    basis: Basis,
}

impl GTerm {
    /// Creates a term, validating exponents against the basis.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::ArityMismatch`] if there is not exactly one exponent per
    /// basis variable, [`MultiError::NegativeExponent`] for any negative exponent and
    /// [`MultiError::ExponentOverflow`] for any exponent above `u32::MAX`.
    pub fn new(coef: f64, exponents: &[i64], basis: Basis) -> Result<Self> {
        if exponents.len() != basis.len() {
            return Err(MultiError::ArityMismatch {
                expected: basis.len(),
                found: exponents.len(),
            });
        }

        let exponents = exponents
            .iter()
            .enumerate()
            .map(|(index, &exponent)| {
                u32::try_from(exponent).map_err(|_| {
                    if exponent < 0 {
                        MultiError::NegativeExponent { index, exponent }
                    } else {
                        MultiError::ExponentOverflow { index, exponent }
                    }
                })
            })
            .collect::<Result<Exponents>>()?;

        Ok(Self::from_parts(coef, exponents, basis))
    }

    /// Creates the constant term `coef`.
    #[must_use]
    pub fn constant(coef: f64, basis: Basis) -> Self {
        let exponents = std::iter::repeat(0).take(basis.len()).collect();
        Self::from_parts(coef, exponents, basis)
    }

    pub(crate) fn from_parts(coef: f64, exponents: Exponents, basis: Basis) -> Self {
        debug_assert_eq!(exponents.len(), basis.len());
        Self {
            coef,
            exponents,
            basis,
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coef(&self) -> f64 {
        self.coef
    }

    /// Returns the exponent tuple.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the variable basis.
    #[must_use]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Returns the total degree (sum of exponents).
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.exponents.iter().copied().map(u64::from).sum()
    }

    /// Returns true if both terms have the same exponent tuple.
    #[must_use]
    pub fn is_like(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }

    /// Evaluates the term at a point aligned with the basis.
    ///
    /// Variables with exponent zero are skipped entirely, so a zero value
    /// there contributes a factor of 1. A zero value under a positive
    /// exponent makes the whole term zero.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::ArityMismatch`] if `values` does not have one entry
    /// per basis variable.
    pub fn evaluate(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.basis.len() {
            return Err(MultiError::ArityMismatch {
                expected: self.basis.len(),
                found: values.len(),
            });
        }

        let mut total = self.coef;
        for (&value, &exponent) in values.iter().zip(&self.exponents) {
            if exponent == 0 {
                continue;
            }
            if value == 0.0 {
                return Ok(0.0);
            }
            total *= pow(value, exponent);
        }
        Ok(total)
    }

    /// Adds a like term.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::IncompatibleTerm`] if the exponent tuples differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_like(other)?;
        Ok(self.with_coef(self.coef + other.coef))
    }

    /// Subtracts a like term.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::IncompatibleTerm`] if the exponent tuples differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_like(other)?;
        Ok(self.with_coef(self.coef - other.coef))
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with_coef(-self.coef)
    }

    /// Multiplies two terms: exponents add slot by slot, coefficients multiply.
    ///
    /// Both terms must share a basis.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::ExponentOverflow`] if a summed exponent exceeds `u32::MAX`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        debug_assert_eq!(self.basis, other.basis);
        let exponents = self
            .exponents
            .iter()
            .zip(&other.exponents)
            .enumerate()
            .map(|(index, (&a, &b))| {
                a.checked_add(b).ok_or(MultiError::ExponentOverflow {
                    index,
                    exponent: i64::from(a) + i64::from(b),
                })
            })
            .collect::<Result<Exponents>>()?;

        Ok(Self::from_parts(
            self.coef * other.coef,
            exponents,
            self.basis.clone(),
        ))
    }

    /// Divides two terms: exponents subtract slot by slot, coefficients divide.
    ///
    /// # Errors
    ///
    /// Returns [`MultiError::DivisionByZero`] if `other` has a zero coefficient and
    /// [`MultiError::NegativeExponent`] if `other` has the larger exponent in any slot.
    pub fn div(&self, other: &Self) -> Result<Self> {
        debug_assert_eq!(self.basis, other.basis);
        if other.coef == 0.0 {
            return Err(MultiError::DivisionByZero);
        }

        let exponents = self
            .exponents
            .iter()
            .zip(&other.exponents)
            .enumerate()
            .map(|(index, (&a, &b))| {
                a.checked_sub(b).ok_or(MultiError::NegativeExponent {
                    index,
                    exponent: i64::from(a) - i64::from(b),
                })
            })
            .collect::<Result<Exponents>>()?;

        Ok(Self::from_parts(
            self.coef / other.coef,
            exponents,
            self.basis.clone(),
        ))
    }

    fn with_coef(&self, coef: f64) -> Self {
        Self::from_parts(coef, self.exponents.clone(), self.basis.clone())
    }

    fn check_like(&self, other: &Self) -> Result<()> {
        if self.is_like(other) {
            Ok(())
        } else {
            Err(MultiError::IncompatibleTerm {
                left: self.exponents.to_vec(),
                right: other.exponents.to_vec(),
            })
        }
    }
}

fn pow(x: f64, n: u32) -> f64 {
    match i32::try_from(n) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(f64::from(n)),
    }
}

impl fmt::Display for GTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coef == 0.0 {
            return write!(f, "0");
        }

        write!(f, "{}", self.coef)?;
        for (name, &e) in self.basis.names().iter().zip(&self.exponents) {
            match e {
                0 => {}
                1 => write!(f, "*{name}")?,
                _ => write!(f, "*{name}^{e}")?,
            }
        }
        Ok(())
    }
}
