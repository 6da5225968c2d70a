//! Context carrying the backend client for the Azimuth job summaries.
//!
//! # Design
//! - The client is built once at boot from the resolved API base URL.
//! - Equality is pointer identity, so consumers re-render only when the client is swapped.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Backend client shared with every page under the router.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Client for `{base}/{job_id}/config` and `{base}/{job_id}/dataset_info`.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Wrap a client pointed at `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
