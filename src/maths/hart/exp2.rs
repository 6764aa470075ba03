//! exp2(x) implementation.
//!
//! Splits x into k = floor(x) and a remainder r in [0, 1). 2^k is written
//! straight into the exponent field, and 2^r is evaluated as
//! sqrt(2) * 2^(r - 1/2) so that EXPB 1067 only sees [-1/2, 1/2].

use super::poly::odd_even_rational;
use super::{floor, pow2i};
use core::f64::consts::SQRT_2;

// EXPB 1067: 2^x on [-1/2, 1/2] as (Q(x^2) + x*P(x^2)) / (Q(x^2) - x*P(x^2)),
// 18.08 digits.
const EXPB_1067_P: [f64; 3] = [
    0.1513906799054338915894328e4,
    0.20202065651286927227886e2,
    0.23093347753750233624e-1,
];
const EXPB_1067_Q: [f64; 3] = [
    0.4368211662727558498496814e4,
    0.233184211427481623790295e3,
    1.0,
];

// 2^k must stay a normal double.
const MIN_K: f64 = -1022.0;
const MAX_K: f64 = 1023.0;

/// 2^x for x in [-1/2, 1/2].
#[inline(always)]
pub(crate) fn exp2_stage1(x: f64) -> f64 {
    odd_even_rational(x, &EXPB_1067_P, &EXPB_1067_Q)
}

/// 2 raised to `x`.
///
/// Returns `0.0` once floor(x) drops below -1022 and `+inf` once it exceeds
/// 1023; results that would be subnormal are flushed to zero.
#[inline]
pub fn exp2(x: f64) -> f64 {
    let k = floor(x);
    if k < MIN_K {
        return 0.0;
    }
    if k > MAX_K {
        return f64::INFINITY;
    }
    // NaN passes both checks; k as i32 is then 0 and the kernel returns NaN.
    pow2i(k as i32) * SQRT_2 * exp2_stage1(x - k - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn stage1_matches_std_on_half_interval() {
        let mut x = -0.5f64;
        while x <= 0.5 {
            let expected = x.exp2();
            let actual = exp2_stage1(x);
            assert!(
                rel_err(actual, expected) <= 4e-16,
                "exp2_stage1({x}): got {actual}, expected {expected}"
            );
            x += 1.0 / 1024.0;
        }
        assert_eq!(exp2_stage1(0.0), 1.0);
    }

    #[test]
    fn exp2_matches_std() {
        let mut x = -1000.0f64;
        while x <= 1000.0 {
            let expected = x.exp2();
            let actual = exp2(x);
            assert!(
                rel_err(actual, expected) <= 1e-15,
                "exp2({x}): got {actual}, expected {expected}"
            );
            x += 0.731;
        }
    }

    #[test]
    fn integer_inputs_land_on_powers_of_two() {
        for k in -20..=20 {
            let expected = (k as f64).exp2();
            let actual = exp2(k as f64);
            assert!(rel_err(actual, expected) <= 1e-15, "exp2({k}) = {actual}");
        }
    }

    #[test]
    fn range_limits_flush_to_zero_and_infinity() {
        assert_eq!(exp2(-1022.5).to_bits(), 0.0f64.to_bits());
        assert_eq!(exp2(-1e10).to_bits(), 0.0f64.to_bits());
        assert_eq!(exp2(f64::NEG_INFINITY).to_bits(), 0.0f64.to_bits());
        assert_eq!(exp2(1024.0), f64::INFINITY);
        assert_eq!(exp2(1e10), f64::INFINITY);
        assert_eq!(exp2(f64::INFINITY), f64::INFINITY);
        assert!(exp2(-1022.0) >= f64::MIN_POSITIVE * (1.0 - 1e-15));
        assert!(exp2(1023.5).is_finite());
        assert!(exp2(f64::NAN).is_nan());
    }
}
