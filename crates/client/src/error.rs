//! Unified error type for all endpoint wrappers.
//!
//! Every public operation returns `Result<T, ApiError>`. HTTP failures keep
//! the status code and decoded body instead of collapsing into a string, and
//! nothing in this crate panics on a bad response.

use thiserror::Error;

use crate::response::Payload;

/// Error returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, or protocol failure before a full response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {reason}")]
    Status {
        status: u16,
        /// Canonical reason phrase, e.g. "Not Found". Empty if unknown.
        reason: String,
        /// Decoded error body, if the server sent one.
        payload: Payload,
    },

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A configured base URL is not a valid URL.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// HTTP status code, for [`ApiError::Status`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_reason_phrase() {
        let err = ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
            payload: Payload::Empty,
        };
        assert!(err.to_string().contains("Not Found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn non_status_errors_have_no_status() {
        let err = ApiError::Decode("expected JSON body".to_string());
        assert_eq!(err.status(), None);
    }
}
