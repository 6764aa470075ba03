//! atan2(y,x) implementation.
//!
//! Four-quadrant dispatch on top of atan(y/x). Only the quadrant is resolved
//! here; signed zeros and infinities get no special treatment beyond what the
//! division and atan already give, and (0, 0) has no angle.

use super::atan;
use core::f64::consts::{FRAC_PI_2, PI};

/// Angle of the point `(x, y)`, in [-pi, pi]. Returns NaN for `(0, 0)` and
/// for NaN inputs.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x > 0.0 {
        return atan(y / x);
    }
    if x < 0.0 {
        return if y >= 0.0 {
            atan(y / x) + PI
        } else {
            atan(y / x) - PI
        };
    }
    if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        f64::NAN
    }
}
