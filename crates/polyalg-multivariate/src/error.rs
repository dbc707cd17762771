//! Errors raised by multivariate term and polynomial operations.

use thiserror::Error;

use crate::basis::Basis;

/// Errors that can occur in multivariate arithmetic and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MultiError {
    /// An exponent is negative, either at construction or as the result of a division.
    #[error("exponent at index {index} is negative ({exponent})")]
    NegativeExponent {
        /// Position of the offending exponent in the basis.
        index: usize,
        /// The rejected exponent.
        exponent: i64,
    },

    /// An exponent does not fit in `u32`, either at construction or as the result of a product.
    #[error("exponent at index {index} is too large ({exponent})")]
    ExponentOverflow {
        /// Position of the offending exponent in the basis.
        index: usize,
        /// The rejected exponent.
        exponent: i64,
    },

    /// Addition or subtraction of terms with different exponent tuples.
    #[error("terms must have the same exponents to add or subtract ({left:?} vs {right:?})")]
    IncompatibleTerm {
        /// Exponents of the left operand.
        left: Vec<u32>,
        /// Exponents of the right operand.
        right: Vec<u32>,
    },

    /// Division by a term with a zero coefficient.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic between polynomials over different variable bases.
    #[error("variable bases differ: {left} vs {right}")]
    BasisMismatch {
        /// Basis of the left operand.
        left: Basis,
        /// Basis of the right operand.
        right: Basis,
    },

    /// An exponent tuple or evaluation point does not match the basis length.
    #[error("expected {expected} values for the basis, found {found}")]
    ArityMismatch {
        /// Number of variables in the basis.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// The expression text could not be parsed.
    #[error("cannot parse term `{term}`: {reason}")]
    Parse {
        /// The offending term text.
        term: String,
        /// What went wrong.
        reason: String,
    },
}

/// Result alias for multivariate operations.
pub type Result<T> = std::result::Result<T, MultiError>;
