//! # polyalg-univariate
//!
//! Univariate polynomial algebra over `f64`.
//!
//! This crate provides:
//! - `Term`: a single monomial `coef * x^order`
//! - `Polynomial`: a dense, always-trimmed coefficient vector
//! - Arithmetic, long division with remainder, derivative and integral
//!
//! ## Canonical Form
//!
//! Trailing zero coefficients are trimmed on construction, but the constant
//! term is always kept, so the zero polynomial is `[0.0]` with degree 0.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use polynomial::Polynomial;
pub use term::Term;
