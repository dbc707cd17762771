//! Walks through the main operations and prints their results.
//!
//! Run with `cargo run -p polyalg --example walkthrough`.

use polyalg::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let p1 = Polynomial::with_variable(vec![0.0, 2.0, 4.0], "x");
    let p2 = Polynomial::new(vec![3.0, 1.0, 2.0, 8.0]);

    println!("p1 = {p1}");
    println!("p2 = {p2}");
    println!("p1(2) = {}", p1.evaluate(2.0));
    println!("p1 + p2 = {}", p1.add(&p2));
    println!("p1 - p2 = {}", p1.sub(&p2));
    println!("p1 * p2 = {}", p1.mul(&p2));

    let (quotient, remainder) = p2.div_rem(&p1)?;
    println!("p2 / p1 = {quotient}, remainder {remainder}");
    println!("reconstructed = {}", quotient.mul(&p1).add(&remainder));

    println!("d/dx p2 = {}", p2.derivative());
    println!("integral p2 = {}", p2.integral());

    let config = AberthConfig::default();
    for coeffs in [vec![-1.0, 0.0, 1.0], vec![1.0, 0.0, 1.0], vec![0.0, 0.0, 1.0]] {
        let p = Polynomial::new(coeffs);
        let result = find_roots(&p, &config);
        let roots: Vec<String> = result.roots.iter().map(ToString::to_string).collect();
        println!(
            "roots of {p}: [{}] after {} iterations (residual {:e})",
            roots.join(", "),
            result.iterations,
            result.convergence
        );
    }

    let g = GPolynomial::parse("5*x^2*y + -1*y*z^3 + 6*x^2*y")?;
    println!("g = {g} over {}", g.basis());
    println!("reduced g = {}", g.reduce());

    let basis = Basis::new(["x", "y"]);
    let a = GTerm::new(2.0, &[1, 2], basis.clone())?;
    let b = GTerm::new(-3.0, &[0, 3], basis)?;
    println!("({a}) * ({b}) = {}", a.mul(&b)?);

    Ok(())
}
