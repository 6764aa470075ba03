//! sin(x) implementation.
//!
//! Wraps x into one turn and hands the fraction to the shared sine pipeline in
//! trig.rs.

use super::trig::{sin_stage3, turns};

/// Sine of `x` (radians). Accepts any finite input; accuracy degrades slowly
/// with |x| because the wrap into one period is done in double precision.
#[inline]
pub fn sin(x: f64) -> f64 {
    sin_stage3(turns(x, 0.0))
}
