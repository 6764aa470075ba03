//! Math kernels.

pub mod hart;
