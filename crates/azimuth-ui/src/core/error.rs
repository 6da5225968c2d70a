//! Error types for backend requests issued by the UI.

use azimuth_api_models::ProblemDetails;
use thiserror::Error;

/// Failure returned by the API client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {message}")]
    Transport {
        /// Transport-level description from the fetch layer.
        message: String,
    },
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the problem document, when present.
        message: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("response decode failed: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

impl ApiError {
    /// Build a status error from an optional problem document.
    #[must_use]
    pub fn from_status(status: u16, problem: Option<&ProblemDetails>) -> Self {
        Self::Status {
            status,
            message: problem.and_then(ProblemDetails::message),
        }
    }

    /// Best-effort message for display; `None` when the failure carried nothing useful.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Transport { message } | Self::Decode { message } => {
                Some(message.clone()).filter(|text| !text.trim().is_empty())
            }
            Self::Status { message, .. } => message.clone(),
        }
    }
}
