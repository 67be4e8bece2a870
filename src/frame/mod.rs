//! Frames (brightness grids) and same-sized frame sequences.

pub(crate) mod model;
pub(crate) mod sequence;
