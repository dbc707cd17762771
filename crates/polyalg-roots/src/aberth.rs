//! The Aberth–Ehrlich method for simultaneous root finding.
//!
//! All `n` roots of a degree-`n` polynomial are approximated at once. Each
//! sweep moves every guess `z_k` by
//!
//! ```text
//! a_k = p(z_k) / p'(z_k)
//! b_k = Σ_{j≠k} 1 / (z_k - z_j)
//! z_k ← z_k - a_k / (1 - a_k b_k)
//! ```
//!
//! where every update reads the same snapshot of the previous guesses.
//! The repulsion term `b_k` keeps guesses from collapsing onto the same
//! root, which makes the method more stable than deflation for clustered
//! roots.

use std::f64::consts::TAU;

use num_traits::Zero;
use polyalg_univariate::Polynomial;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::complex::Complex64;

/// Upper bound on perturbation attempts when a guess sits on a zero of `p'`.
const MAX_PERTURBATIONS: usize = 16;

/// Relative size of the step taken off a critical point.
const PERTURBATION_SCALE: f64 = 1e-6;

/// Configuration for the Aberth iteration.
#[derive(Clone, Debug)]
pub struct AberthConfig {
    /// Maximum number of sweeps.
    pub max_iters: usize,
    /// Stop once `Σ |p(z_k)|` falls below this value.
    pub tolerance: f64,
    /// Decimal places the reported roots are rounded to.
    pub precision: u32,
    /// Seed for the initial guesses when no generator is supplied.
    pub seed: u64,
}

impl Default for AberthConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-10,
            precision: 4,
            seed: 42,
        }
    }
}

impl AberthConfig {
    /// Sets the sweep budget.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the number of decimal places kept in the result.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the seed of the default generator.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of a root search.
///
/// Non-convergence is not an error: `converged` is false and `convergence`
/// holds the residual reached when the sweep budget ran out.
#[derive(Clone, Debug)]
pub struct RootsResult {
    /// Approximate roots, rounded to the configured precision.
    pub roots: Vec<Complex64>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Final value of `Σ |p(z_k)|`, measured before rounding.
    pub convergence: f64,
    /// Whether `convergence` dropped below the tolerance.
    pub converged: bool,
}

/// Cauchy bound on root magnitude: every root satisfies
/// `|z| <= 1 + max_{i<n} |a_i / a_n|`.
///
/// Returns 0 for constant polynomials.
#[must_use]
pub fn root_bound(p: &Polynomial) -> f64 {
    let n = p.degree();
    if n == 0 {
        return 0.0;
    }

    let lead = p.coeff(n);
    1.0 + p.coeffs()[..n]
        .iter()
        .map(|c| (c / lead).abs())
        .fold(0.0, f64::max)
}

/// Evaluates `p` at a complex point using Horner's method.
#[must_use]
pub fn evaluate_complex(p: &Polynomial, z: Complex64) -> Complex64 {
    p.coeffs()
        .iter()
        .rev()
        .fold(Complex64::ZERO, |acc, &c| acc * z + Complex64::from(c))
}

/// Finds all complex roots of `p`, seeding guesses from `config.seed`.
///
/// # Example
///
/// ```
/// use polyalg_roots::{find_roots, AberthConfig};
/// use polyalg_univariate::Polynomial;
///
/// // x^2 - 1
/// let result = find_roots(&Polynomial::new(vec![-1.0, 0.0, 1.0]), &AberthConfig::default());
/// assert_eq!(result.roots.len(), 2);
/// assert!(result.converged);
/// ```
#[must_use]
pub fn find_roots(p: &Polynomial, config: &AberthConfig) -> RootsResult {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    find_roots_with_rng(p, config, &mut rng)
}

/// Finds all complex roots of `p`, drawing initial guesses from `rng`.
#[must_use]
pub fn find_roots_with_rng<R: Rng + ?Sized>(
    p: &Polynomial,
    config: &AberthConfig,
    rng: &mut R,
) -> RootsResult {
    let n = p.degree();
    if n == 0 {
        return RootsResult {
            roots: Vec::new(),
            iterations: 0,
            convergence: 0.0,
            converged: true,
        };
    }

    let dp = p.derivative();
    let bound = root_bound(p);
    let mut guesses = initial_guesses(n, bound, rng);
    debug!(degree = n, bound, "starting Aberth iteration");

    let mut convergence = residual(p, &guesses);
    let mut iterations = 0;

    while iterations < config.max_iters && convergence >= config.tolerance {
        guesses = sweep(p, &dp, &guesses, rng);
        iterations += 1;
        convergence = residual(p, &guesses);
        trace!(iteration = iterations, convergence, "Aberth sweep");
    }

    if !convergence.is_finite() {
        debug!(iterations, convergence, "Aberth residual is not finite, stopping");
    }

    let converged = convergence < config.tolerance;
    debug!(iterations, convergence, converged, "Aberth iteration finished");

    RootsResult {
        roots: guesses
            .into_iter()
            .map(|z| z.round_to(config.precision))
            .collect(),
        iterations,
        convergence,
        converged,
    }
}

/// Draws `n` guesses with real and imaginary parts uniform in `[-bound, bound]`.
fn initial_guesses<R: Rng + ?Sized>(n: usize, bound: f64, rng: &mut R) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            Complex64::new(
                rng.gen_range(-1.0..=1.0) * bound,
                rng.gen_range(-1.0..=1.0) * bound,
            )
        })
        .collect()
}

/// Sum of `|p(z_k)|` over all guesses.
fn residual(p: &Polynomial, guesses: &[Complex64]) -> f64 {
    guesses
        .iter()
        .map(|&z| evaluate_complex(p, z).magnitude())
        .sum()
}

/// One simultaneous update of every guess from the `snapshot`.
fn sweep<R: Rng + ?Sized>(
    p: &Polynomial,
    dp: &Polynomial,
    snapshot: &[Complex64],
    rng: &mut R,
) -> Vec<Complex64> {
    let mut next = Vec::with_capacity(snapshot.len());

    for (k, &guess) in snapshot.iter().enumerate() {
        let mut z = guess;
        let mut derivative = evaluate_complex(dp, z);
        let mut attempts = 0;
        while derivative.is_zero() && attempts < MAX_PERTURBATIONS {
            z = perturb(z, rng);
            derivative = evaluate_complex(dp, z);
            attempts += 1;
            debug!(guess = %guess, perturbed = %z, "guess on a critical point, perturbing");
        }
        if derivative.is_zero() {
            next.push(z);
            continue;
        }

        let a = evaluate_complex(p, z) / derivative;
        let b = snapshot
            .iter()
            .enumerate()
            .filter(|&(j, &w)| j != k && !(z - w).is_zero())
            .fold(Complex64::ZERO, |acc, (_, &w)| {
                acc + Complex64::ONE / (z - w)
            });

        let denom = Complex64::ONE - a * b;
        let offset = if denom.is_zero() { a } else { a / denom };
        let updated = z - offset;

        next.push(if updated.is_finite() {
            updated
        } else {
            perturb(z, rng)
        });
    }

    next
}

/// Moves `z` a small, always nonzero distance in a random direction.
fn perturb<R: Rng + ?Sized>(z: Complex64, rng: &mut R) -> Complex64 {
    let radius = PERTURBATION_SCALE * (1.0 + z.magnitude());
    z + Complex64::from_polar(radius, rng.gen_range(0.0..TAU))
}
