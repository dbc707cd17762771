//! Errors raised by univariate term and polynomial operations.

use thiserror::Error;

/// Errors that can occur in univariate arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A term was constructed with a negative order.
    #[error("term order must be non-negative, got {order}")]
    NegativeOrder {
        /// The rejected order.
        order: i64,
    },

    /// Addition or subtraction of terms with different orders.
    #[error("terms must be of the same order to add or subtract (x^{left} vs x^{right})")]
    IncompatibleOrder {
        /// Order of the left operand.
        left: usize,
        /// Order of the right operand.
        right: usize,
    },

    /// Division by a zero term or the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,

    /// Term division whose result would have a negative order.
    #[error("cannot divide x^{numerator} by x^{denominator}: result order would be negative")]
    OrderUnderflow {
        /// Order of the numerator.
        numerator: usize,
        /// Order of the denominator.
        denominator: usize,
    },
}

/// Result alias for univariate operations.
pub type Result<T> = std::result::Result<T, PolyError>;
