//! Editing session state and its pure operations.

pub(crate) mod history;
pub(crate) mod onion;
pub(crate) mod state;
