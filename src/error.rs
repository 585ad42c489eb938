//! API error taxonomy.
//!
//! Classifies transport and decode failures from the oracle backend into a
//! small set of variants with user-facing messages. Transport failures are
//! never fatal: they surface as an explicit error state in the UI, distinct
//! from the semantic "silence" (zero matches) state.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors returned by the oracle API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("http error: {0}")]
    Other(String),
}

impl ApiError {
    /// Whether resubmitting the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Connection(_) => true,
            ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            ApiError::Decode(_) => false,
            ApiError::Other(_) => false,
        }
    }

    /// A short message suitable for display in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connection(_) => {
                "The oracle could not be reached. Check your connection and try again.".to_string()
            }
            ApiError::Timeout(_) => {
                "The oracle took too long to answer. Try again.".to_string()
            }
            ApiError::Status { status, .. } => match *status {
                500..=599 => "The oracle is troubled. Try again later.".to_string(),
                _ => format!("The oracle refused the request (HTTP {}).", status),
            },
            ApiError::Decode(_) => {
                "The oracle's answer could not be understood.".to_string()
            }
            ApiError::Other(msg) => format!("Request failed: {}", msg),
        }
    }

    /// A short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Connection(_) => "E_API_CONN",
            ApiError::Timeout(_) => "E_API_TIMEOUT",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode(_) => "E_API_DECODE",
            ApiError::Other(_) => "E_API_OTHER",
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(msg) => ApiError::Connection(msg),
            HttpError::Timeout(msg) => ApiError::Timeout(msg),
            HttpError::ServerError { status, message } => ApiError::Status { status, message },
            HttpError::Io(msg) => ApiError::Other(msg),
            HttpError::InvalidUrl(msg) => ApiError::Other(msg),
            HttpError::Other(msg) => ApiError::Other(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
