//! HTTP client for the job-scoped backend summaries.

use crate::core::error::ApiError;
use crate::core::logic::{decode_response_body, job_api_path};
use azimuth_api_models::{DatasetInfo, JobConfig};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// GET a job resource; an empty or `null` body decodes as `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        job_id: &str,
        resource: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = job_api_path(&self.base_url, job_id, resource);
        let response = Request::get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::Transport {
                message: err.to_string(),
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| ApiError::Transport {
            message: err.to_string(),
        })?;
        decode_response_body(status, &body)
    }

    pub(crate) async fn fetch_config(&self, job_id: &str) -> Result<Option<JobConfig>, ApiError> {
        self.get_json(job_id, "config").await
    }

    pub(crate) async fn fetch_dataset_info(
        &self,
        job_id: &str,
    ) -> Result<Option<DatasetInfo>, ApiError> {
        self.get_json(job_id, "dataset_info").await
    }
}
