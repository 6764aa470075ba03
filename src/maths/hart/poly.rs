//! Fixed-table polynomial and rational evaluation.
//!
//! Coefficient tables are stored lowest degree first, the order they are
//! listed in Hart's appendix. Evaluation starts from the leading coefficient
//! and runs Horner's scheme down to the constant term.

/// Horner evaluation of `c[0] + c[1]*x + ... + c[n-1]*x^(n-1)`.
#[inline(always)]
pub(crate) fn horner(x: f64, c: &[f64]) -> f64 {
    match c.split_last() {
        Some((&lead, rest)) => rest.iter().rev().fold(lead, |p, &a| p * x + a),
        None => 0.0,
    }
}

/// Odd polynomial `x * P(x^2)`.
#[inline(always)]
pub(crate) fn odd_poly(x: f64, c: &[f64]) -> f64 {
    horner(x * x, c) * x
}

/// Rational `P(x) / Q(x)`.
#[inline(always)]
pub(crate) fn rational(x: f64, p: &[f64], q: &[f64]) -> f64 {
    horner(x, p) / horner(x, q)
}

/// Rational of the form `(Q(x^2) + x*P(x^2)) / (Q(x^2) - x*P(x^2))`.
#[inline(always)]
pub(crate) fn odd_even_rational(x: f64, p: &[f64], q: &[f64]) -> f64 {
    let x2 = x * x;
    let px = horner(x2, p) * x;
    let qx = horner(x2, q);
    (qx + px) / (qx - px)
}
