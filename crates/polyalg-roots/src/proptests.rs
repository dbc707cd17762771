//! Property-based tests for root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::aberth::{evaluate_complex, find_roots, root_bound, AberthConfig};
    use crate::complex::Complex64;
    use polyalg_univariate::Polynomial;

    // Monic polynomials with distinct integer roots in [-5, 5]
    fn distinct_roots() -> impl Strategy<Value = Vec<i32>> {
        proptest::sample::subsequence((-5i32..=5).collect::<Vec<_>>(), 1..=4)
    }

    fn from_roots(roots: &[i32]) -> Polynomial {
        roots.iter().fold(Polynomial::one(), |acc, &r| {
            acc.mul(&Polynomial::new(vec![-f64::from(r), 1.0]))
        })
    }

    proptest! {
        #[test]
        fn finds_distinct_integer_roots(roots in distinct_roots(), seed in 0u64..1000) {
            let p = from_roots(&roots);
            let config = AberthConfig::default().with_seed(seed).with_max_iters(200);
            let result = find_roots(&p, &config);

            prop_assert_eq!(result.roots.len(), roots.len());
            for &r in &roots {
                let hit = result
                    .roots
                    .iter()
                    .any(|z| (z.re - f64::from(r)).abs() < 1e-3 && z.im.abs() < 1e-3);
                prop_assert!(hit, "root {} missing from {:?}", r, result.roots);
            }
        }

        #[test]
        fn roots_lie_within_bound(coeffs in proptest::collection::vec(-10i32..10, 2..=5), lead in 1i32..5) {
            let mut coeffs: Vec<f64> = coeffs.into_iter().map(f64::from).collect();
            coeffs.push(f64::from(lead));
            let p = Polynomial::new(coeffs);
            let result = find_roots(&p, &AberthConfig::default().with_max_iters(300));

            if result.converged {
                let bound = root_bound(&p);
                for z in &result.roots {
                    prop_assert!(z.magnitude() <= bound + 1e-3);
                }
            }
        }

        #[test]
        fn horner_matches_real_evaluation(coeffs in proptest::collection::vec(-10i32..10, 1..=5), x in -4i32..4) {
            let p = Polynomial::new(coeffs.into_iter().map(f64::from).collect());
            let x = f64::from(x);
            prop_assert_eq!(evaluate_complex(&p, Complex64::from(x)), Complex64::from(p.evaluate(x)));
        }
    }
}
