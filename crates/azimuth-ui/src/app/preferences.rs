//! Persistence and environment helpers for the app shell.

use crate::core::logic::resolve_api_base;
use crate::core::query::QueryState;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const API_BASE_URL_KEY: &str = "azimuth.api_base_url";
pub(crate) const DEFAULT_JOB_ID: &str = "local";

/// API base URL: a stored override wins, otherwise the page origin plus `/api`.
pub(crate) fn api_base_url() -> String {
    let override_url = match LocalStorage::get::<String>(API_BASE_URL_KEY) {
        Ok(value) => Some(value),
        Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            log_storage_error("get", API_BASE_URL_KEY, &err.to_string());
            None
        }
    };
    let origin = window().location().origin().ok();
    resolve_api_base(override_url.as_deref(), origin.as_deref())
}

/// Selection state read straight from `window.location`, for use outside a router.
pub(crate) fn current_query() -> QueryState {
    let search = window().location().search().unwrap_or_default();
    QueryState::from_search(&search)
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
