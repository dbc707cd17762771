//! # polyalg-roots
//!
//! Numerical root finding for univariate polynomials.
//!
//! The Aberth method approximates every complex root of a polynomial at
//! once. Initial guesses are random, so the generator is injectable: use
//! [`find_roots`] with a seed from [`AberthConfig`], or
//! [`find_roots_with_rng`] with any `rand::Rng`.
//!
//! Results are best effort. A search that exhausts its sweep budget still
//! returns its current guesses, flagged with `converged == false`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aberth;
pub mod complex;

#[cfg(test)]
mod proptests;

pub use aberth::{
    evaluate_complex, find_roots, find_roots_with_rng, root_bound, AberthConfig, RootsResult,
};
pub use complex::Complex64;
