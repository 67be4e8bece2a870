//! Source-code, SVG and PNG renderings of frames.

pub(crate) mod code;
pub(crate) mod png;
pub(crate) mod svg;
