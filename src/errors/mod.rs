use serde::Deserialize;
use std::fmt;

use crate::constants::ERR_MALFORMED_RESPONSE;

/// Error envelope returned by the remote API on non-2xx responses.
///
/// The shape is parsed defensively: both fields are optional so a body
/// that is valid JSON but misses `message` still yields a usable error
/// instead of an opaque decode failure.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, DNS.
    Network(String),
    /// Non-2xx response from the API, or a 2xx body that failed to parse.
    Server { status: u16, message: String },
    /// Resource absent (404), distinguished so detail views can render a
    /// terminal not-found state.
    NotFound(String),
    /// 401 from the API; the bearer token is missing, expired, or revoked.
    Unauthorized(String),
    /// Client-side validation failure, checked before dispatching a request.
    Validation(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "Network Error: {}", message),
            ApiError::Server { status, message } => {
                write!(f, "Server Error [{}]: {}", status, message)
            }
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            ApiError::Validation(errors) => write!(f, "Validation Error: {}", errors.join(", ")),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Build the error for a non-2xx status with a best-effort message from
    /// the response body.
    pub fn from_status(status: u16, envelope: Option<ErrorEnvelope>, fallback: &str) -> Self {
        let message = envelope
            .and_then(|e| e.message)
            .unwrap_or_else(|| fallback.to_string());

        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Build the error for a 2xx response whose body did not match the
    /// expected schema. Malformed payloads are server errors, never nulls
    /// propagated into rendering.
    pub fn malformed(status: u16, detail: impl fmt::Display) -> Self {
        ApiError::Server {
            status,
            message: format!("{}: {}", ERR_MALFORMED_RESPONSE, detail),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_auth_and_not_found() {
        let err = ApiError::from_status(401, None, "auth failed");
        assert_eq!(err, ApiError::Unauthorized("auth failed".to_string()));

        let err = ApiError::from_status(404, None, "no such page");
        assert_eq!(err, ApiError::NotFound("no such page".to_string()));
    }

    #[test]
    fn test_from_status_prefers_envelope_message() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"success":false,"message":"title taken"}"#).unwrap();
        let err = ApiError::from_status(409, Some(envelope), "Conflict");
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "title taken".to_string()
            }
        );
    }

    #[test]
    fn test_from_status_survives_missing_message() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = ApiError::from_status(500, Some(envelope), "Internal Server Error");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }
}
