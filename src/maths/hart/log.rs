//! Natural logarithm.
//!
//! Change of base onto log2: ln(x) = log2(x) * ln(2).

use super::log2;
use core::f64::consts::LN_2;

/// Natural logarithm of `x`. Returns NaN for `x <= 0`.
///
/// LOG2 2524 carries about 8 significant digits, so this is the least
/// accurate of the kernels: expect absolute errors around 4e-9.
#[inline]
pub fn log(x: f64) -> f64 {
    log2(x) * LN_2
}

/// Alias of [`log`].
#[inline(always)]
pub fn ln(x: f64) -> f64 {
    log(x)
}
