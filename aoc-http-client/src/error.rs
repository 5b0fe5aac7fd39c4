//! Error types for the AOC HTTP client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("{} (HTTP {status})", classify(.status))]
    InvalidStatus {
        /// The status code that was received
        status: StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl AocError {
    /// Classify a non-success status, if this error carries one
    pub fn status_kind(&self) -> Option<StatusKind> {
        match self {
            AocError::InvalidStatus { status } => Some(StatusKind::from(*status)),
            _ => None,
        }
    }
}

fn classify(status: &StatusCode) -> StatusKind {
    StatusKind::from(*status)
}

/// What a non-success status from the input endpoint usually means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// 404: the puzzle is not unlocked yet
    NotYetAvailable,
    /// 400 or 500: the session cookie was rejected, or the server failed
    InvalidSessionOrServerError,
    /// Any other status
    Other,
}

impl From<StatusCode> for StatusKind {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => StatusKind::NotYetAvailable,
            StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR => {
                StatusKind::InvalidSessionOrServerError
            }
            _ => StatusKind::Other,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            StatusKind::NotYetAvailable => "Input not yet available",
            StatusKind::InvalidSessionOrServerError => "Invalid session cookie or server error",
            StatusKind::Other => "HTTP request failed",
        };
        f.write_str(msg)
    }
}
