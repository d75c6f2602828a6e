//! Classification of failed REST calls
//!
//! Turns an HTTP error response or a transport failure into exactly one
//! [`NoodlesError`] variant.

use noodles_types::{NoodlesError, VendorErrorBody};
use reqwest::StatusCode;
use serde_json::Value;

/// Result type for REST operations
pub type RestResult<T> = Result<T, NoodlesError>;

/// Classify a received error response
///
/// The vendor `code` drives the branch when the body is the usual
/// `{code, message, data}` shape. Otherwise the HTTP status does, and the
/// message falls back to a `message` field, the raw body text, or the
/// canonical reason phrase, in that order.
pub fn classify_response(status: StatusCode, body: &[u8]) -> NoodlesError {
    if let Ok(vendor) = serde_json::from_slice::<VendorErrorBody>(body) {
        return NoodlesError::from_vendor_body(vendor);
    }

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    NoodlesError::from_vendor(status.as_u16(), message, None)
}

/// Classify a failure where no usable response was received
///
/// Anything that left no usable response is [`NoodlesError::Network`] with
/// status code 0 and no data. Requests that reqwest refused to build
/// never reached the network and are reported as invalid instead.
pub fn classify_transport_error(err: reqwest::Error) -> NoodlesError {
    if err.is_builder() {
        return NoodlesError::invalid_request(err.to_string());
    }
    if err.is_timeout() {
        return NoodlesError::network(format!("request timed out: {err}"));
    }
    NoodlesError::network(err.to_string())
}
