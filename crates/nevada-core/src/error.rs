//! Error types for the Nevada console.

use serde_json::Value;
use thiserror::Error;

/// A shared error type for the whole Nevada client stack.
///
/// The remote API surfaces exactly one failure class: an HTTP operation that
/// did not succeed, carrying a display message, the status code, and the raw
/// response body for diagnostics. That class is `Api`; the remaining variants
/// cover the ambient local concerns (session files, configuration).
#[derive(Error, Debug)]
pub enum NevadaError {
    /// Remote API call failed (non-2xx response or transport failure).
    ///
    /// `status` is the HTTP status code, or 0 when the request never produced
    /// a response (connection refused, DNS failure). `body` is the parsed
    /// response body when one existed.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// No session is present but the operation requires one.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// IO error (session/config file operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NevadaError {
    /// Creates an Api error from a status code and an already-parsed body.
    ///
    /// The display message is taken from the body's `detail` or `message`
    /// field when present, falling back to a generic status line. This is
    /// the one place the remote error contract is interpreted.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| {
                b.get("detail")
                    .or_else(|| b.get("message"))
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Self::Api {
            message,
            status,
            body,
        }
    }

    /// Creates an Api error for a request that never reached the server.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status: 0,
            body: None,
        }
    }

    /// Creates an Unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns the HTTP status code for Api errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is an authentication failure (401/403 or no session).
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Unauthenticated(_) => true,
            Self::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NevadaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NevadaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NevadaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, NevadaError>`.
pub type Result<T> = std::result::Result<T, NevadaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_prefers_detail() {
        let err = NevadaError::from_response(404, Some(json!({"detail": "not found"})));
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_from_response_falls_back_to_message_field() {
        let err = NevadaError::from_response(400, Some(json!({"message": "bad payload"})));
        assert_eq!(err.to_string(), "bad payload");
    }

    #[test]
    fn test_from_response_generic_message_without_body() {
        let err = NevadaError::from_response(502, None);
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(err.is_api());
    }

    #[test]
    fn test_auth_failure_detection() {
        assert!(NevadaError::from_response(401, None).is_auth_failure());
        assert!(NevadaError::unauthenticated("no session").is_auth_failure());
        assert!(!NevadaError::from_response(500, None).is_auth_failure());
    }
}
