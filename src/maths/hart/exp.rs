//! exp(x) implementation.
//!
//! Change of base onto exp2: e^x = 2^(x * log2(e)).

use super::exp2;
use core::f64::consts::LOG2_E;

/// e raised to `x`. Flushes to `0.0` below about -708.4 and overflows to
/// `+inf` above about 709.8, following the thresholds of [`exp2`].
#[inline]
pub fn exp(x: f64) -> f64 {
    exp2(x * LOG2_E)
}
