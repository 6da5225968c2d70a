//! Read-only snapshot of a remote resource as seen by the render loop.

use crate::core::error::ApiError;

/// Lifecycle of a single backend fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Remote<T> {
    /// Request in flight (or not yet issued).
    #[default]
    Pending,
    /// Request failed; carries the best-effort message.
    Failed {
        /// Message reported by the backend or transport, if any.
        message: Option<String>,
    },
    /// Request succeeded without a payload.
    Empty,
    /// Request succeeded with a payload.
    Ready(T),
}

impl<T> Remote<T> {
    /// Map a client result into a remote snapshot.
    #[must_use]
    pub fn from_result(result: Result<Option<T>, ApiError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::Empty,
            Err(err) => Self::Failed {
                message: err.user_message(),
            },
        }
    }

    /// Borrow the payload when ready.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the request is still outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
