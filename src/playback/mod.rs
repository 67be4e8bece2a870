//! Frame-accurate playback driven by host refresh callbacks.

pub(crate) mod clock;
pub(crate) mod realtime;
pub(crate) mod scheduler;
