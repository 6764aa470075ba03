//! log2(x) implementation.
//!
//! Reads the binary exponent straight from the bit pattern and rewrites the
//! exponent field so the mantissa lands in [0.5, 1), the interval LOG2 2524
//! was fitted on:
//!
//!   log2(x) = k + log2(m),  x = m * 2^k,  m in [0.5, 1)
//!
//! Subnormals are scaled by 2^54 first. Exact powers of two skip the kernel.

use super::poly::rational;
use super::{EXP_BIAS, MANT_MASK, f64_from_bits, f64_to_bits, get_exp_bits, with_exp_bits};

// LOG2 2524: log2(x) on [0.5, 1] as P(x) / Q(x), 8.32 digits.
const LOG2_2524_P: [f64; 4] = [
    -0.205466671951e1,
    -0.88626599391e1,
    0.610585199015e1,
    0.481147460989e1,
];
const LOG2_2524_Q: [f64; 4] = [
    0.353553425277,
    0.454517087629e1,
    0.642784209029e1,
    1.0,
];

const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);

/// log2(x) for x in [0.5, 1].
#[inline(always)]
pub(crate) fn log2_stage1(x: f64) -> f64 {
    rational(x, &LOG2_2524_P, &LOG2_2524_Q)
}

/// Base-2 logarithm of `x`. Returns NaN for `x <= 0` and for NaN.
#[inline]
pub fn log2(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return x;
    }

    let mut ux = f64_to_bits(x);
    let mut e = get_exp_bits(ux);
    let mut k = 0;
    if e == 0 {
        ux = f64_to_bits(x * TWO54);
        e = get_exp_bits(ux);
        k = -54;
    }

    if ux & MANT_MASK == 0 {
        return (k + e - EXP_BIAS) as f64;
    }

    let m = f64_from_bits(with_exp_bits(ux, EXP_BIAS - 1));
    (k + e - (EXP_BIAS - 1)) as f64 + log2_stage1(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-8;

    #[test]
    fn stage1_matches_std_on_half_interval() {
        let mut x = 0.5f64;
        while x <= 1.0 {
            let expected = x.log2();
            let actual = log2_stage1(x);
            assert!(
                (actual - expected).abs() <= TOL,
                "log2_stage1({x}): got {actual}, expected {expected}"
            );
            x += 1.0 / 2048.0;
        }
    }

    #[test]
    fn powers_of_two_are_exact() {
        for k in -1074i32..=1023 {
            let x = if k >= -1022 {
                f64::from_bits(((k + EXP_BIAS) as u64) << 52)
            } else {
                f64::from_bits(1u64 << (k + 1074))
            };
            assert_eq!(log2(x), k as f64, "log2(2^{k})");
        }
    }

    #[test]
    fn log2_matches_std() {
        let mut x = 1e-300f64;
        while x < 1e300 {
            let expected = x.log2();
            let actual = log2(x);
            assert!(
                (actual - expected).abs() <= TOL * expected.abs().max(1.0),
                "log2({x}): got {actual}, expected {expected}"
            );
            x *= 1.37;
        }
    }

    #[test]
    fn subnormals_are_normalized_first() {
        let x = f64::MIN_POSITIVE * 0.75;
        let expected = x.log2();
        assert!((log2(x) - expected).abs() <= TOL * expected.abs());
        assert_eq!(log2(f64::from_bits(1)), -1074.0);
    }

    #[test]
    fn domain_errors_are_nan() {
        assert!(log2(0.0).is_nan());
        assert!(log2(-0.0).is_nan());
        assert!(log2(-1.0).is_nan());
        assert!(log2(f64::NEG_INFINITY).is_nan());
        assert!(log2(f64::NAN).is_nan());
        assert_eq!(log2(f64::INFINITY), f64::INFINITY);
    }
}
