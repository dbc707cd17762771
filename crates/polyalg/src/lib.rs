//! # polyalg
//!
//! Polynomial algebra over `f64`.
//!
//! ## Features
//!
//! - **Univariate**: dense polynomials with long division, derivative and integral
//! - **Root Finding**: all complex roots at once via the Aberth method
//! - **Multivariate**: term lists over a named basis with like-term reduction
//!
//! ## Quick Start
//!
//! ```rust
//! use polyalg::prelude::*;
//!
//! let p = Polynomial::new(vec![3.0, 1.0, 2.0, 8.0]);
//! let d = Polynomial::new(vec![0.0, 2.0, 4.0]);
//! let (q, r) = p.div_rem(&d).unwrap();
//! assert_eq!(q.mul(&d).add(&r), p);
//!
//! let roots = find_roots(&Polynomial::new(vec![-1.0, 0.0, 1.0]), &AberthConfig::default());
//! assert_eq!(roots.roots.len(), 2);
//!
//! let g = GPolynomial::parse("5*x^2*y + -1*y*z^3 + 6*x^2*y").unwrap();
//! assert_eq!(g.reduce().to_string(), "-1*y*z^3 + 11*x^2*y");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyalg_multivariate as multivariate;
pub use polyalg_roots as roots;
pub use polyalg_univariate as univariate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyalg_multivariate::{Basis, GPolynomial, GTerm, MonomialOrder, MultiError};
    pub use polyalg_roots::{find_roots, find_roots_with_rng, AberthConfig, Complex64, RootsResult};
    pub use polyalg_univariate::{PolyError, Polynomial, Term};
}
