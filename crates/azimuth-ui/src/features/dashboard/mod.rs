//! Dashboard feature slice.
//!
//! # Design
//! - Decide section visibility in pure functions so the rules test natively.
//! - Keep fetches in the feature `api` module and rendering in `view`.
//! - Pass selection state in explicitly; nothing here reads the location.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
mod preview_card;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::DashboardPage;
