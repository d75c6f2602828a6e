//! The `{code, message, data}` response envelope

use serde::{Deserialize, Serialize};

use crate::error::{NoodlesError, NoodlesResult};

/// Status code the API uses for a successful call
pub const SUCCESS_CODE: u16 = 200;

/// Standard Noodles API response wrapper
///
/// On the wire the fields are named `code`, `message` and `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code (200 for success)
    #[serde(rename = "code")]
    pub status_code: u16,
    /// Human-readable message describing the response
    #[serde(default)]
    pub message: String,
    /// The response payload (absent when the API sent none)
    #[serde(rename = "data")]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Check if the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_CODE
    }

    /// Borrow the payload, if any
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Unwrap the payload
    ///
    /// Fails with [`NoodlesError::UnexpectedEmptyPayload`] if the API said
    /// success but sent nothing.
    pub fn into_payload(self) -> NoodlesResult<T> {
        self.payload
            .ok_or(NoodlesError::UnexpectedEmptyPayload {
                status_code: self.status_code,
                message: self.message,
            })
    }

    /// Map the payload, keeping code and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status_code: self.status_code,
            message: self.message,
            payload: self.payload.map(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_codes::ErrorKind;

    #[test]
    fn test_envelope_wire_names() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"code":200,"message":"success","data":[1,2,3]}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, "success");
        assert_eq!(resp.payload(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_null_and_missing_payload() {
        let resp: ApiResponse<u32> =
            serde_json::from_str(r#"{"code":200,"message":"ok","data":null}"#).unwrap();
        assert!(resp.payload.is_none());

        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"code":200,"message":"ok"}"#).unwrap();
        assert!(resp.payload.is_none());
    }

    #[test]
    fn test_into_payload_empty() {
        let resp: ApiResponse<u32> = ApiResponse {
            status_code: 200,
            message: "ok".into(),
            payload: None,
        };
        let err = resp.into_payload().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEmptyPayload);
        assert_eq!(err.status_code(), 200);
        assert_eq!(err.message(), "ok");
    }

    #[test]
    fn test_into_payload_present() {
        let resp = ApiResponse {
            status_code: 200,
            message: "ok".into(),
            payload: Some(7u32),
        };
        assert_eq!(resp.map(|v| v * 2).into_payload().unwrap(), 14);
    }
}
