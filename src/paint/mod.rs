//! Pixel-level editing algorithms and generated patterns.

pub(crate) mod fill;
pub(crate) mod patterns;
