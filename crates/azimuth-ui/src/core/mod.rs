//! Core, DOM-free primitives and helpers for the Web UI.
pub mod error;
pub mod logic;
pub mod query;
pub mod remote;
pub mod store;
