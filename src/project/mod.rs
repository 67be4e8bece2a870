//! JSON project documents.

pub(crate) mod document;
