//! Parsing of flat polynomial expressions into term data.
//!
//! The accepted grammar is deliberately small:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor ('*' factor)*
//! factor := '-'* (name ('^' int)? | number ('^' int)?)
//! ```
//!
//! A `-` that follows a complete factor starts a new, negated term, so
//! `x - y` reads as `x + -y`. Repeated variables in one term accumulate
//! their exponents. Parentheses and division are not supported.

use crate::basis::Basis;
use crate::error::{MultiError, Result};

/// Raw data for one term: a coefficient and one exponent per basis variable.
#[derive(Clone, Debug, PartialEq)]
pub struct TermData {
    /// The coefficient.
    pub coefficient: f64,
    /// Exponents aligned with the basis. Not yet validated.
    pub exponents: Vec<i64>,
}

/// One parsed term before the basis is known.
struct ParsedTerm {
    coefficient: f64,
    powers: Vec<(String, i64)>,
}

/// Parses an expression into term data and the basis it is expressed over.
///
/// Variables appear in the basis in order of first appearance.
///
/// # Errors
///
/// Returns [`MultiError::Parse`] for empty terms, empty factors, malformed
/// numbers or exponents, and invalid variable names.
///
/// # Example
///
/// ```
/// use polyalg_multivariate::parser::parse;
///
/// let (terms, basis) = parse("-5*x^2*y + 2*z").unwrap();
/// assert_eq!(basis.names(), ["x", "y", "z"]);
/// assert_eq!(terms[0].exponents, vec![2, 1, 0]);
/// assert_eq!(terms[1].coefficient, 2.0);
/// ```
pub fn parse(input: &str) -> Result<(Vec<TermData>, Basis)> {
    let mut names: Vec<String> = Vec::new();
    let mut parsed = Vec::new();

    for text in split_terms(input) {
        let term = parse_term(&text)?;
        for (name, _) in &term.powers {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        parsed.push(term);
    }

    let terms = parsed
        .into_iter()
        .map(|term| TermData {
            coefficient: term.coefficient,
            exponents: names
                .iter()
                .map(|name| {
                    term.powers
                        .iter()
                        .find(|(n, _)| n == name)
                        .map_or(0, |&(_, e)| e)
                })
                .collect(),
        })
        .collect();

    Ok((terms, Basis::new(names)))
}

/// Splits on `+`, and on any `-` that follows a complete factor.
fn split_terms(input: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        match c {
            '+' => terms.push(std::mem::take(&mut current)),
            '-' if ends_factor(&current) => {
                terms.push(std::mem::take(&mut current));
                current.push('-');
            }
            _ => current.push(c),
        }
    }
    terms.push(current);

    terms
}

/// True if `current` ends in something a binary minus can follow.
fn ends_factor(current: &str) -> bool {
    let trimmed = current.trim_end();
    match trimmed.chars().last() {
        None | Some('*' | '^' | '-') => false,
        // Exponent marker of a float literal such as `1e-3`
        Some('e' | 'E') => !is_mantissa(&trimmed[..trimmed.len() - 1]),
        Some(_) => true,
    }
}

/// True if the last factor of `text` is a bare decimal such as `1` or `2.5`.
fn is_mantissa(text: &str) -> bool {
    let factor = text
        .rsplit('*')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_start_matches('-')
        .trim_start();
    factor.chars().any(|c| c.is_ascii_digit())
        && factor.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn parse_term(text: &str) -> Result<ParsedTerm> {
    let error = |reason: &str| MultiError::Parse {
        term: text.trim().to_string(),
        reason: reason.to_string(),
    };

    if text.trim().is_empty() {
        return Err(error("empty term"));
    }

    let mut coefficient = 1.0;
    let mut powers: Vec<(String, i64)> = Vec::new();

    for raw in text.split('*') {
        let mut factor = raw.trim();
        while let Some(rest) = factor.strip_prefix('-') {
            coefficient = -coefficient;
            factor = rest.trim_start();
        }
        if factor.is_empty() {
            return Err(error("empty factor"));
        }

        let (base, exponent) = match factor.split_once('^') {
            Some((base, exponent)) => (base.trim(), Some(exponent.trim())),
            None => (factor, None),
        };

        if base.starts_with(|c: char| c.is_ascii_alphabetic()) {
            if !base.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(error(&format!("invalid variable name `{base}`")));
            }
            let exponent = match exponent {
                Some(e) => e
                    .parse::<i64>()
                    .map_err(|_| error(&format!("invalid exponent `{e}`")))?,
                None => 1,
            };
            match powers.iter_mut().find(|(name, _)| name == base) {
                Some((_, e)) => *e += exponent,
                None => powers.push((base.to_string(), exponent)),
            }
        } else {
            let value = base
                .parse::<f64>()
                .map_err(|_| error(&format!("invalid number `{base}`")))?;
            let value = match exponent {
                Some(e) => value.powi(
                    e.parse::<i32>()
                        .map_err(|_| error(&format!("invalid exponent `{e}`")))?,
                ),
                None => value,
            };
            coefficient *= value;
        }
    }

    Ok(ParsedTerm {
        coefficient,
        powers,
    })
}
