//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod spinner;
pub(crate) mod split_select;

pub(crate) use empty_state::{EmptyState, EmptyTone};
pub(crate) use spinner::Spinner;
pub(crate) use split_select::SplitSelect;
