//! Error types for the Noodles SDK

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error_codes::{ErrorKind, RecoveryStrategy};

/// Raw error body returned by the Noodles API on failure
///
/// Transient: it is consumed once by [`NoodlesError::from_vendor_body`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VendorErrorBody {
    /// Status code as reported by the API
    pub code: u16,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Additional context (always null in the current API version)
    #[serde(default)]
    pub data: Option<Value>,
}

/// Main error type for Noodles SDK operations
///
/// Every variant exposes the same field set through [`kind`](Self::kind),
/// [`status_code`](Self::status_code), [`message`](Self::message) and
/// [`data`](Self::data).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoodlesError {
    // === Errors reported by the API ===
    /// Invalid request parameters (400)
    #[error("Bad request: {message}")]
    BadRequest { message: String, data: Option<Value> },

    /// Authentication failed (401)
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String, data: Option<Value> },

    /// Rate limit exceeded (429)
    #[error("Rate limited: {message}")]
    RateLimited { message: String, data: Option<Value> },

    /// Vendor-side failure (500)
    #[error("Internal server error: {message}")]
    InternalServer { message: String, data: Option<Value> },

    /// Any other status code received in a response
    #[error("API error {status_code}: {message}")]
    Unclassified {
        status_code: u16,
        message: String,
        data: Option<Value>,
    },

    // === Transport Errors ===
    /// No response was received (connection failure, timeout)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode response ({status_code}): {message}")]
    Decode { status_code: u16, message: String },

    // === Client Errors ===
    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request could not be built before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The API reported success but sent no payload
    #[error("Response {status_code} carried no payload: {message}")]
    UnexpectedEmptyPayload { status_code: u16, message: String },
}

impl NoodlesError {
    /// Classify a failure reported by the API
    ///
    /// `code` drives the branch; `message` and `data` are kept verbatim.
    pub fn from_vendor(code: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        let message = message.into();
        match ErrorKind::from_status_code(code) {
            ErrorKind::BadRequest => Self::BadRequest { message, data },
            ErrorKind::Unauthorized => Self::Unauthorized { message, data },
            ErrorKind::RateLimited => Self::RateLimited { message, data },
            ErrorKind::InternalServer => Self::InternalServer { message, data },
            _ => Self::Unclassified {
                status_code: code,
                message,
                data,
            },
        }
    }

    /// Classify a parsed vendor error body
    pub fn from_vendor_body(body: VendorErrorBody) -> Self {
        Self::from_vendor(body.code, body.message, body.data)
    }

    /// Create a network error
    ///
    /// Carries no status code and no data regardless of the underlying cause.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// The discriminant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::InternalServer { .. } => ErrorKind::InternalServer,
            Self::Unclassified { .. } => ErrorKind::Unclassified,
            Self::Network { .. } => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::UnexpectedEmptyPayload { .. } => ErrorKind::UnexpectedEmptyPayload,
        }
    }

    /// Status code associated with the error
    ///
    /// `0` when no response was involved.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::Unauthorized { .. } => 401,
            Self::RateLimited { .. } => 429,
            Self::InternalServer { .. } => 500,
            Self::Unclassified { status_code, .. }
            | Self::Decode { status_code, .. }
            | Self::UnexpectedEmptyPayload { status_code, .. } => *status_code,
            Self::Network { .. } | Self::Configuration(_) | Self::InvalidRequest(_) => 0,
        }
    }

    /// Human-readable message, not meant for programmatic branching
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::RateLimited { message, .. }
            | Self::InternalServer { message, .. }
            | Self::Unclassified { message, .. }
            | Self::Network { message }
            | Self::Decode { message, .. }
            | Self::UnexpectedEmptyPayload { message, .. } => message,
            Self::Configuration(message) | Self::InvalidRequest(message) => message,
        }
    }

    /// Opaque context data sent by the API, if any
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::BadRequest { data, .. }
            | Self::Unauthorized { data, .. }
            | Self::RateLimited { data, .. }
            | Self::InternalServer { data, .. }
            | Self::Unclassified { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        self.kind().recovery_strategy()
    }

    /// Returns true if this error is potentially recoverable via retry
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Returns true if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Result type alias for Noodles operations
pub type NoodlesResult<T> = Result<T, NoodlesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(400, ErrorKind::BadRequest)]
    #[case(401, ErrorKind::Unauthorized)]
    #[case(429, ErrorKind::RateLimited)]
    #[case(500, ErrorKind::InternalServer)]
    fn test_dedicated_codes_preserve_fields(#[case] code: u16, #[case] kind: ErrorKind) {
        let data = Some(json!({"field": "coin_id"}));
        let err = NoodlesError::from_vendor(code, "something went wrong", data.clone());

        assert_eq!(err.kind(), kind);
        assert_eq!(err.status_code(), code);
        assert_eq!(err.message(), "something went wrong");
        assert_eq!(err.data(), data.as_ref());

        let err = NoodlesError::from_vendor(code, "no data", None);
        assert_eq!(err.kind(), kind);
        assert!(err.data().is_none());
    }

    #[rstest]
    #[case(403)]
    #[case(404)]
    #[case(418)]
    #[case(502)]
    #[case(503)]
    fn test_other_codes_unclassified(#[case] code: u16) {
        let err = NoodlesError::from_vendor(code, "nope", None);
        assert_eq!(err.kind(), ErrorKind::Unclassified);
        assert_eq!(err.status_code(), code);
        assert!(matches!(err, NoodlesError::Unclassified { status_code, .. } if status_code == code));
    }

    #[test]
    fn test_network_error_has_no_status_or_data() {
        let err = NoodlesError::network("error sending request: connection refused");
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status_code(), 0);
        assert!(err.data().is_none());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_vendor_body_parsing() {
        let body: VendorErrorBody =
            serde_json::from_str(r#"{"code":400,"message":"invalid coin_id","data":null}"#).unwrap();
        let err = NoodlesError::from_vendor_body(body);
        assert!(matches!(err, NoodlesError::BadRequest { ref message, data: None } if message == "invalid coin_id"));
    }

    #[test]
    fn test_display() {
        let err = NoodlesError::from_vendor(401, "invalid api key", None);
        assert_eq!(err.to_string(), "Unauthorized: invalid api key");

        let err = NoodlesError::from_vendor(404, "not found", None);
        assert_eq!(err.to_string(), "API error 404: not found");
    }

    #[test]
    fn test_configuration_error() {
        let err = NoodlesError::configuration("API key is required");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.message(), "API key is required");
        assert!(!err.is_retryable());
    }
}
