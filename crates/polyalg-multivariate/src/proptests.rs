//! Property-based tests for multivariate reduction and arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::basis::Basis;
    use crate::error::MultiError;
    use crate::parser::TermData;
    use crate::polynomial::GPolynomial;

    fn xyz() -> Basis {
        Basis::new(["x", "y", "z"])
    }

    // Integer coefficients and small exponents so that like terms collide often
    fn term_data() -> impl Strategy<Value = TermData> {
        (-5i32..5, proptest::collection::vec(0i64..3, 3)).prop_map(|(c, exponents)| TermData {
            coefficient: f64::from(c),
            exponents,
        })
    }

    fn terms() -> impl Strategy<Value = Vec<TermData>> {
        proptest::collection::vec(term_data(), 0..8)
    }

    // Fractional and widely scaled coefficients, where summation order shows
    fn fractional_term() -> impl Strategy<Value = TermData> {
        let coefficient = prop_oneof![
            -1e3f64..1e3,
            prop::sample::select(vec![0.1, 0.2, 0.3, 1.0, 1e16, -1e16]),
        ];
        (coefficient, proptest::collection::vec(0i64..2, 3))
            .prop_map(|(coefficient, exponents)| TermData { coefficient, exponents })
    }

    fn shuffled_terms() -> impl Strategy<Value = (Vec<TermData>, Vec<TermData>)> {
        proptest::collection::vec(fractional_term(), 0..12)
            .prop_flat_map(|data| (Just(data.clone()), Just(data).prop_shuffle()))
    }

    fn gpoly() -> impl Strategy<Value = GPolynomial> {
        terms().prop_map(|data| GPolynomial::new(&data, xyz()).unwrap())
    }

    fn point() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec((-3i32..3).prop_map(f64::from), 3)
    }

    proptest! {
        #[test]
        fn reduce_idempotent(p in gpoly()) {
            let once = p.reduce();
            prop_assert_eq!(once.reduce(), once);
        }

        #[test]
        fn reduce_is_canonical(p in gpoly()) {
            let r = p.reduce();
            prop_assert!(r.terms().iter().all(|t| t.coef() != 0.0));
            for (i, a) in r.terms().iter().enumerate() {
                for b in &r.terms()[i + 1..] {
                    prop_assert!(!a.is_like(b));
                }
            }
        }

        #[test]
        fn reduce_ignores_term_order((data, shuffled) in shuffled_terms()) {
            let a = GPolynomial::new(&data, xyz()).unwrap().reduce();
            let b = GPolynomial::new(&shuffled, xyz()).unwrap().reduce();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn reduce_preserves_value(p in gpoly(), x in point()) {
            prop_assert_eq!(p.reduce().evaluate(&x).unwrap(), p.evaluate(&x).unwrap());
        }

        #[test]
        fn add_commutative(p in gpoly(), q in gpoly()) {
            prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
        }

        #[test]
        fn sub_self_is_zero(p in gpoly()) {
            prop_assert!(p.sub(&p).unwrap().is_empty());
        }

        #[test]
        fn mul_evaluates_to_product(p in gpoly(), q in gpoly(), x in point()) {
            let product = p.mul(&q).unwrap();
            prop_assert_eq!(
                product.evaluate(&x).unwrap(),
                p.evaluate(&x).unwrap() * q.evaluate(&x).unwrap()
            );
        }

        #[test]
        fn mismatched_bases_rejected(p in gpoly()) {
            let other = GPolynomial::zero(Basis::new(["x", "z", "y"]));
            let rejected = matches!(p.add(&other), Err(MultiError::BasisMismatch { .. }));
            prop_assert!(rejected);
        }
    }
}
