//! Property-based tests for univariate polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;

    // Integer-valued coefficients keep every sum and product exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    // Coefficient sequences, possibly with trailing zeros
    fn raw_coeffs() -> impl Strategy<Value = Vec<f64>> {
        (
            proptest::collection::vec(small_coeff(), 0..=5),
            0usize..3,
        )
            .prop_map(|(mut coeffs, zeros)| {
                coeffs.extend(std::iter::repeat(0.0).take(zeros));
                coeffs
            })
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Divisors with a power-of-two leading coefficient, so quotients stay exact
    fn divisor() -> impl Strategy<Value = Polynomial> {
        (
            proptest::collection::vec(small_coeff(), 0..=3),
            prop_oneof![Just(1.0), Just(-1.0), Just(2.0), Just(-4.0)],
        )
            .prop_map(|(mut coeffs, lead)| {
                coeffs.push(lead);
                Polynomial::new(coeffs)
            })
    }

    proptest! {
        #[test]
        fn trim_is_canonical(coeffs in raw_coeffs()) {
            let p = Polynomial::new(coeffs);
            let again = Polynomial::new(p.coeffs().to_vec());
            prop_assert_eq!(&again, &p);
            prop_assert!(p.degree() == 0 || p.coeffs()[p.degree()] != 0.0);
            prop_assert_eq!(p.degree(), p.coeffs().len() - 1);
        }

        #[test]
        fn add_identity(p in small_poly()) {
            prop_assert_eq!(p.add(&Polynomial::zero()), p.clone());
            prop_assert_eq!(Polynomial::zero().add(&p), p);
        }

        #[test]
        fn sub_self_is_zero(p in small_poly()) {
            prop_assert!(p.sub(&p).is_zero());
        }

        #[test]
        fn mul_identity(p in small_poly()) {
            prop_assert_eq!(p.mul(&Polynomial::one()), p.clone());
            prop_assert_eq!(Polynomial::one().mul(&p), p);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in -3i32..3) {
            let x = f64::from(x);
            prop_assert_eq!(a.mul(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn division_reconstructs(a in small_poly(), b in divisor()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn derivative_inverts_integral(p in small_poly()) {
            prop_assert_eq!(p.integral().derivative(), p);
        }
    }
}
