#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::hart;
pub use maths::hart::{atan, atan2, cos, exp, exp2, floor, ln, log, log2, sin};
