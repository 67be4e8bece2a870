//! Vector-to-matrix conversion.
//!
//! A vector document is drawn onto a white surface [`SUPERSAMPLE`](svg::SUPERSAMPLE) times the
//! grid resolution on each axis, then box-averaged down to one brightness value per cell.

pub(crate) mod downsample;
pub(crate) mod icon;
pub(crate) mod svg;
