//! Response envelope shared by both endpoint groups.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decoded response body, keyed off the response `content-type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body declared and parsed as JSON.
    Json(Value),
    /// Anything else, returned verbatim.
    Text(String),
    /// No body.
    Empty,
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Status and decoded body of one round trip.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    payload: Payload,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, payload: Payload) -> Self {
        Self { status, payload }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Convert a non-2xx response into [`ApiError::Status`].
    pub fn require_success(self) -> Result<Self, ApiError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status.as_u16(),
                reason: self.status.canonical_reason().unwrap_or("").to_string(),
                payload: self.payload,
            })
        }
    }

    /// Deserialize the JSON payload into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self.payload {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Payload::Text(_) => Err(ApiError::Decode("expected JSON body, got text".to_string())),
            Payload::Empty => Err(ApiError::Decode("expected JSON body, got nothing".to_string())),
        }
    }

    /// Deserialize a JSON array payload into `Vec<T>`.
    ///
    /// The list endpoints historically reply with an array; anything else
    /// (an error wrapper, an empty body) is treated as an empty list rather
    /// than a decode failure. An actual array with mismatched items is still
    /// an error.
    pub fn decode_array_lenient<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        match self.payload {
            Payload::Json(value @ Value::Array(_)) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }
}
