//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::error::ApiError;
use azimuth_api_models::{DatasetSplitName, ProblemDetails};
use serde::de::DeserializeOwned;

/// Message shown when a failed request carried no usable description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Path used when the API base cannot be derived from the page origin.
pub const FALLBACK_API_BASE: &str = "http://localhost:8091";

/// Suffix appended to the page origin to reach the backend API.
pub const API_PREFIX: &str = "/api";

/// Build a job-scoped view path such as `/{job}/dataset_warnings{search}`.
#[must_use]
pub fn job_view_path(job_id: &str, segment: &str, search: &str) -> String {
    format!("/{job_id}/{segment}{search}")
}

/// Build a split-scoped view path such as `/{job}/dataset_splits/{split}/class_overlap{search}`.
#[must_use]
pub fn split_view_path(
    job_id: &str,
    split: DatasetSplitName,
    segment: &str,
    search: &str,
) -> String {
    format!("/{job_id}/dataset_splits/{split}/{segment}{search}")
}

/// Build the REST path for a job-scoped backend resource.
#[must_use]
pub fn job_api_path(base_url: &str, job_id: &str, resource: &str) -> String {
    format!("{}/{job_id}/{resource}", base_url.trim_end_matches('/'))
}

/// Pick the message shown for a failed fetch, falling back to [`UNKNOWN_ERROR`].
#[must_use]
pub fn error_message_or_fallback(message: Option<&str>) -> String {
    message
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// Resolve the API base URL from an explicit override or the page origin.
///
/// An override wins when it is non-blank; otherwise the API is assumed to be
/// mounted under [`API_PREFIX`] on the same origin.
#[must_use]
pub fn resolve_api_base(override_url: Option<&str>, origin: Option<&str>) -> String {
    if let Some(value) = override_url.map(str::trim).filter(|v| !v.is_empty()) {
        return value.trim_end_matches('/').to_string();
    }
    match origin.map(str::trim).filter(|v| !v.is_empty() && *v != "null") {
        Some(origin) => format!("{}{API_PREFIX}", origin.trim_end_matches('/')),
        None => format!("{FALLBACK_API_BASE}{API_PREFIX}"),
    }
}

/// Classify a backend response body.
///
/// Non-2xx statuses become [`ApiError::Status`], carrying the error document's
/// message when the body decodes as one. A 2xx body that is empty or `null`
/// means the resource has no data yet and yields `Ok(None)`.
///
/// # Errors
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Decode`]
/// when a 2xx body is not a valid `T`.
pub fn decode_response_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        let problem = serde_json::from_str::<ProblemDetails>(body).ok();
        return Err(ApiError::from_status(status, problem.as_ref()));
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use azimuth_api_models::DatasetInfo;

    #[test]
    fn view_paths_carry_search_verbatim() {
        assert_eq!(
            job_view_path("local", "dataset_warnings", "?pipeline_index=0"),
            "/local/dataset_warnings?pipeline_index=0"
        );
        assert_eq!(
            split_view_path("local", DatasetSplitName::Train, "class_overlap", ""),
            "/local/dataset_splits/train/class_overlap"
        );
    }

    #[test]
    fn api_path_trims_trailing_slash() {
        assert_eq!(
            job_api_path("http://x/api/", "local", "dataset_info"),
            "http://x/api/local/dataset_info"
        );
    }

    #[test]
    fn error_message_falls_back() {
        assert_eq!(error_message_or_fallback(Some("boom")), "boom");
        assert_eq!(error_message_or_fallback(Some("  ")), UNKNOWN_ERROR);
        assert_eq!(error_message_or_fallback(None), UNKNOWN_ERROR);
    }

    #[test]
    fn api_base_prefers_override() {
        assert_eq!(
            resolve_api_base(Some("https://azimuth.internal/api/"), Some("http://x")),
            "https://azimuth.internal/api"
        );
        assert_eq!(
            resolve_api_base(Some(" "), Some("http://localhost:8080/")),
            "http://localhost:8080/api"
        );
        assert_eq!(
            resolve_api_base(None, Some("null")),
            "http://localhost:8091/api"
        );
    }

    #[test]
    fn empty_or_null_success_body_means_no_data() {
        assert_eq!(decode_response_body::<DatasetInfo>(200, ""), Ok(None));
        assert_eq!(decode_response_body::<DatasetInfo>(200, " null\n"), Ok(None));
    }

    #[test]
    fn success_body_decodes() {
        let info = decode_response_body::<DatasetInfo>(
            200,
            r#"{"availableDatasetSplits":{"eval":true},"similarityAvailable":true}"#,
        )
        .expect("body decodes")
        .expect("body carries data");
        assert!(info.split_available(DatasetSplitName::Eval));
        assert!(info.similarity_available);
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_response_body::<DatasetInfo>(200, "{not json")
            .expect_err("malformed body fails");
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn error_status_keeps_backend_detail() {
        let err = decode_response_body::<DatasetInfo>(
            404,
            r#"{"detail":"Dataset split train is not available."}"#,
        )
        .expect_err("404 fails");
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: Some("Dataset split train is not available.".to_string()),
            }
        );
        assert_eq!(
            error_message_or_fallback(err.user_message().as_deref()),
            "Dataset split train is not available."
        );
    }

    #[test]
    fn error_status_without_document_falls_back() {
        let err = decode_response_body::<DatasetInfo>(502, "<html>Bad Gateway</html>")
            .expect_err("502 fails");
        assert_eq!(err.user_message(), None);
        assert_eq!(
            error_message_or_fallback(err.user_message().as_deref()),
            UNKNOWN_ERROR
        );
    }
}
