//! Error types for backend API operations.
//!
//! Every failure an operation can hit is folded into [`ApiError`] at the
//! API-client boundary. The variants map onto how the UI reacts:
//! transport and malformed-payload errors read as "the backend is broken",
//! server errors carry the backend's own `detail` message, and rejections
//! are application-level refusals (`success: false`) that keep the current
//! view open for a retry.

use thiserror::Error;

use crate::traits::HttpError;

/// Unified error type for API client operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never completed (connection, timeout, IO).
    #[error("{0}")]
    Transport(String),

    /// The server responded but the payload could not be parsed.
    #[error("Malformed server response: {0}")]
    Malformed(String),

    /// The server returned a non-2xx status, optionally with a `detail`
    /// message in the body.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// The server processed the request and refused it (`success: false`).
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Status code of a server error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
