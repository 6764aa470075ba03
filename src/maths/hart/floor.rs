//! floor(x) without libm.
//!
//! Truncates toward zero by clearing the fraction bits below the binary point,
//! then steps down by one for negative non-integral inputs. Used by the
//! periodic reduction in sin/cos and the integer split in exp2.

use super::{EXP_BIAS, MANT_BITS, MANT_MASK, f64_from_bits, f64_to_bits, get_exp_bits};

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

#[inline(always)]
fn trunc_bits(x: f64) -> f64 {
    let u = f64_to_bits(x);
    let e = get_exp_bits(u);
    if e == 0x7ff {
        return x; // NaN/Inf
    }
    let j0 = e - EXP_BIAS;
    if j0 < 0 {
        // |x| < 1
        return f64_from_bits(u & SIGN_MASK);
    }
    if j0 >= MANT_BITS as i32 {
        return x;
    }
    f64_from_bits(u & !(MANT_MASK >> j0))
}

/// Largest integer-valued double not greater than `x`.
///
/// NaN and infinities are returned unchanged.
#[inline]
pub fn floor(x: f64) -> f64 {
    let t = trunc_bits(x);
    if x < 0.0 && t != x { t - 1.0 } else { t }
}
