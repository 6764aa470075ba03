//! Shared sine pipeline for sin and cos.
//!
//! Arguments are measured in whole turns (units of 2*pi). The periodic wrap
//! keeps the fractional turn in [0, 1), the quadrant fold maps it onto
//! [0, 0.25], and the triple-angle identity maps that onto sin(pi/6 * x) for
//! x in [0, 1], where SIN 2922 applies.

use super::floor;
use super::poly::odd_poly;

const INV_TAU: f64 = 1.0 / core::f64::consts::TAU;

// SIN 2922: sin(pi/6 * x) on [0, 1], 16.47 digits.
const SIN_2922: [f64; 6] = [
    0.52359877559829885532,
    -0.2392459620393377657e-1,
    0.32795319441392666e-3,
    -0.214071970654441e-5,
    0.815113605169e-8,
    -0.2020852964e-10,
];

/// sin(pi/6 * x) for x in [0, 1].
#[inline(always)]
pub(crate) fn sin_stage1(x: f64) -> f64 {
    odd_poly(x, &SIN_2922)
}

/// sin(2*pi * x) for x in [0, 0.25], via sin(3t) = sin(t) * (3 - 4 sin^2(t)).
#[inline(always)]
pub(crate) fn sin_stage2(x: f64) -> f64 {
    let s = sin_stage1(x * 4.0);
    s * (3.0 - 4.0 * s * s)
}

/// sin(2*pi * x) for x in [0, 1].
#[inline(always)]
pub(crate) fn sin_stage3(x: f64) -> f64 {
    if x < 0.25 {
        sin_stage2(x)
    } else if x < 0.5 {
        sin_stage2(0.5 - x)
    } else if x < 0.75 {
        -sin_stage2(x - 0.5)
    } else {
        -sin_stage2(1.0 - x)
    }
}

/// Fractional part of `x / 2pi + phase`, in [0, 1]. The upper end is only
/// reached when a tiny negative turn rounds up, and sin_stage3 maps it to 0.
///
/// The subtraction cancels the integer turns exactly but cannot recover the
/// rounding of the division, so accuracy falls off as |x| grows.
#[inline(always)]
pub(crate) fn turns(x: f64, phase: f64) -> f64 {
    let t = x * INV_TAU + phase;
    t - floor(t)
}
