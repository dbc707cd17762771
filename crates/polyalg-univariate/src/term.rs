//! Univariate monomials `coef * x^order`.

use std::fmt;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// A single univariate monomial `coef * x^order`.
///
/// Terms are plain values: every arithmetic operation returns a new term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    coef: f64,
    order: usize,
}

impl Term {
    /// Creates a term, rejecting negative orders.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeOrder`] if `order < 0`.
    pub fn new(coef: f64, order: i64) -> Result<Self> {
        let order = usize::try_from(order).map_err(|_| PolyError::NegativeOrder { order })?;
        Ok(Self { coef, order })
    }

    /// Creates the monomial `coef * x^order`.
    #[must_use]
    pub const fn monomial(coef: f64, order: usize) -> Self {
        Self { coef, order }
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coef(&self) -> f64 {
        self.coef
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Evaluates `coef * x^order`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coef * pow(x, self.order)
    }

    /// Adds two terms of the same order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IncompatibleOrder`] if the orders differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_order(other)?;
        Ok(Self::monomial(self.coef + other.coef, self.order))
    }

    /// Subtracts two terms of the same order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IncompatibleOrder`] if the orders differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_order(other)?;
        Ok(Self::monomial(self.coef - other.coef, self.order))
    }

    /// Multiplies two terms: coefficients multiply, orders add.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::monomial(self.coef * other.coef, self.order + other.order)
    }

    /// Divides two terms: coefficients divide, orders subtract.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` has a zero coefficient and
    /// [`PolyError::OrderUnderflow`] if `other` has the higher order.
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.coef == 0.0 {
            return Err(PolyError::DivisionByZero);
        }
        let order = self
            .order
            .checked_sub(other.order)
            .ok_or(PolyError::OrderUnderflow {
                numerator: self.order,
                denominator: other.order,
            })?;
        Ok(Self::monomial(self.coef / other.coef, order))
    }

    /// Embeds the term into a polynomial whose only nonzero coefficient sits at `order`.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        let mut coeffs = vec![0.0; self.order + 1];
        coeffs[self.order] = self.coef;
        Polynomial::new(coeffs)
    }

    /// Formats the term using `var` as the indeterminate.
    #[must_use]
    pub fn to_string_with_var(&self, var: &str) -> String {
        if self.coef == 0.0 {
            "0".to_string()
        } else if self.order == 0 {
            format!("{}", self.coef)
        } else {
            format!("{}*{var}^{}", self.coef, self.order)
        }
    }

    fn check_same_order(&self, other: &Self) -> Result<()> {
        if self.order == other.order {
            Ok(())
        } else {
            Err(PolyError::IncompatibleOrder {
                left: self.order,
                right: other.order,
            })
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_var("x"))
    }
}

/// `x^n` for a non-negative integer exponent.
pub(crate) fn pow(x: f64, n: usize) -> f64 {
    match i32::try_from(n) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(n as f64),
    }
}
