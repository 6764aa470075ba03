//! cos(x) implementation.
//!
//! Uses cos(x) = sin(x + pi/2): the quarter-turn shift is added after
//! converting to turns, so it stays exact.

use super::trig::{sin_stage3, turns};

/// Cosine of `x` (radians). Same domain and accuracy as [`sin`](super::sin).
#[inline]
pub fn cos(x: f64) -> f64 {
    sin_stage3(turns(x, 0.25))
}
