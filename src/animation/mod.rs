//! Easing curves and in-between frame generation.

pub(crate) mod ease;
pub(crate) mod tween;
