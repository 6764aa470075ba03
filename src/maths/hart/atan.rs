//! atan(x) implementation.
//!
//! The positive half-line is cut into 8 partitions centred on
//! x_i = tan((2i - 2) * pi/32). Inside partition i the addition formula
//!
//!   atan(x) = (2i - 2) * pi/32 + atan(t),  t = 1/x_i - (1/x_i^2 + 1) / (1/x_i + x)
//!
//! leaves |t| <= tan(pi/32), where ARCTN 4903 applies. Partition 1 needs no
//! shift at all. Negative inputs use atan(-x) = -atan(x).

use super::poly::odd_poly;
use core::f64::consts::{FRAC_PI_2, PI};

// ARCTN 4903: atan(x) on [0, tan(pi/32)], 16.52 digits in Hart. The
// coefficients below carry 11 to 17 digits, which limits the kernel to about
// 3e-14 absolute near the top of its interval.
const ARCTN_4903: [f64; 6] = [
    0.99999999999969557,
    -0.3333333333318,
    0.1999999997276,
    -0.14285702288,
    0.11108719478,
    -0.8870580341e-1,
];

// Partition lower bounds: X[i] = tan((2i - 1) * pi/32), with X[0] = 0 and an
// infinite sentinel. The search never reads X[8].
const X_I: [f64; 9] = [
    0.0,
    0.0984914033571642477671304050090839155018329620361328125,
    0.3033466836073424044428747947677038609981536865234375,
    0.53451113595079158269385288804187439382076263427734375,
    0.82067879082866024287312711749109439551830291748046875,
    1.218503525587976366040265929768793284893035888671875,
    1.8708684117893887854933154812897555530071258544921875,
    3.29655820893832096629694206058047711849212646484375,
    f64::INFINITY,
];

// 1/x_i for partition i (unused for i <= 1).
const INV_X_I: [f64; 9] = [
    0.0,
    0.0,
    5.02733949212584807497705696732737123966217041015625,
    2.41421356237309492343001693370752036571502685546875,
    1.496605762665489169904731170390732586383819580078125,
    1.0000000000000002220446049250313080847263336181640625,
    0.66817863791929898997778991542872972786426544189453125,
    0.414213562373095089963470627481001429259777069091796875,
    0.1989123673796580893391450217677629552781581878662109375,
];

// (1/x_i)^2 + 1 for partition i (unused for i <= 1).
const INV_X_I_SQ_P1: [f64; 9] = [
    0.0,
    0.0,
    26.2741423690881816810360760428011417388916015625,
    6.8284271247461898468600338674150407314300537109375,
    3.23982880884355051165357508580200374126434326171875,
    2.000000000000000444089209850062616169452667236328125,
    1.446462692171689656817079594475217163562774658203125,
    1.1715728752538099310953612075536511838436126708984375,
    1.0395661298965801488947136022034101188182830810546875,
];

// 1 / tan(pi/32). Above this the last partition would push t past
// tan(pi/32), so atan(x) = pi/2 - atan(1/x) is used instead.
const RECIP_MIN: f64 = 10.153170387608862;

/// atan(x) for x in [0, tan(pi/32)].
#[inline(always)]
pub(crate) fn atan_stage1(x: f64) -> f64 {
    odd_poly(x, &ARCTN_4903)
}

/// Index R of the partition holding x: X[R-1] <= x < X[R].
///
/// NaN fails every comparison and lands in partition 1.
#[inline(always)]
pub(crate) fn partition(x: f64) -> usize {
    let mut lo = 0usize;
    let mut hi = 8usize;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if X_I[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

/// atan(x) for x >= 0 (including +inf).
#[inline(always)]
pub(crate) fn atan_stage2(x: f64) -> f64 {
    if x > RECIP_MIN {
        return FRAC_PI_2 - atan_stage1(1.0 / x);
    }
    let r = partition(x);
    if r <= 1 {
        return atan_stage1(x);
    }
    let t = INV_X_I[r] - INV_X_I_SQ_P1[r] / (INV_X_I[r] + x);
    let angle = (2 * r - 2) as f64 * PI / 32.0;
    if t >= 0.0 {
        angle + atan_stage1(t)
    } else {
        angle - atan_stage1(-t)
    }
}

/// Arctangent of `x`, in [-pi/2, pi/2].
#[inline]
pub fn atan(x: f64) -> f64 {
    if x >= 0.0 {
        atan_stage2(x)
    } else {
        -atan_stage2(-x)
    }
}
