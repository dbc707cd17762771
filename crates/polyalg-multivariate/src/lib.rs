//! # polyalg-multivariate
//!
//! Multivariate polynomial algebra over `f64`.
//!
//! This crate provides:
//! - `Basis`: the ordered variable names shared by a polynomial's terms
//! - `GTerm`: a monomial `coef * v1^e1 * ... * vn^en`
//! - `GPolynomial`: a term list with like-term reduction and ring arithmetic
//! - A small expression parser producing term data
//!
//! ## Bases
//!
//! Arithmetic is only defined between polynomials over identical bases
//! (same names, same order). A mismatch is an error; bases are never
//! unified automatically.
//!
//! Division of multivariate polynomials is not provided.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod error;
pub mod ordering;
pub mod parser;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use basis::Basis;
pub use error::{MultiError, Result};
pub use ordering::MonomialOrder;
pub use parser::{parse, TermData};
pub use polynomial::GPolynomial;
pub use term::{Exponents, GTerm};
