//! Application error types.
//!
//! Errors here are deliberately coarse: the dashboard is expected to stay
//! usable when the remote lead service misbehaves, so read failures are
//! consumed by the caller as a degradation signal rather than propagated to
//! the user, while submission failures carry a message suitable for direct
//! display.

use serde_json::Value;
use thiserror::Error;

/// Top-level error type for the lead client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side rejection of a lead payload before any network call.
    ///
    /// `details` maps field names to human-readable messages.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Lead creation failed: network failure, server rejection, or a
    /// malformed response. The message is shown to the user as-is; the
    /// caller must keep its form state so the submission can be retried.
    #[error("{message}")]
    Submission { message: String },

    /// Lead or dashboard-stats retrieval failed. Never fatal: an empty lead
    /// list and locally derived counters are the fallback.
    #[error("request to {endpoint} failed: {message}")]
    Fetch { endpoint: String, message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    pub fn fetch(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
