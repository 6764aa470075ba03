//! Hart-style approximations of sin, cos, atan2, exp and log.
//!
//! Every function follows the same two steps. First the argument is reduced
//! with a property of the function (periodicity, symmetry, an addition
//! formula, or the binary64 exponent field) onto a small interval. Then a
//! fixed minimax polynomial or rational function from Hart's "Computer
//! Approximations" is evaluated on that interval. Nothing here calls into a
//! platform libm.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]

mod atan;
mod atan2;
mod cos;
mod exp;
mod exp2;
mod floor;
mod log;
mod log2;
mod poly;
mod sin;
mod trig;

pub use atan::atan;
pub use atan2::atan2;
pub use cos::cos;
pub use exp::exp;
pub use exp2::exp2;
pub use floor::floor;
pub use log::{ln, log};
pub use log2::log2;
pub use sin::sin;

// ========= binary64 layout =========

pub(crate) const MANT_BITS: u32 = 52;
pub(crate) const EXP_BIAS: i32 = 1023;
pub(crate) const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
pub(crate) const MANT_MASK: u64 = 0x000f_ffff_ffff_ffff;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> MANT_BITS) & 0x7ff) as i32
}

/// Replaces the exponent field of `u` with `e`, keeping sign and mantissa.
#[inline(always)]
fn with_exp_bits(u: u64, e: i32) -> u64 {
    (u & !EXP_MASK) | (((e as u64) & 0x7ff) << MANT_BITS)
}

/// 2^k built directly in the exponent field. Only valid for normal results,
/// k in [-1022, 1023].
#[inline(always)]
fn pow2i(k: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&k));
    f64_from_bits(((k + EXP_BIAS) as u64) << MANT_BITS)
}
