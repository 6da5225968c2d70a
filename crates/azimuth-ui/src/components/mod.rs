//! Shared UI components.

pub(crate) mod atoms;
pub(crate) mod daisy;
