//! API key handling
//!
//! # Security
//!
//! The key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! When turned into a header value it is marked sensitive so reqwest
//! redacts it from its own debug output.

use noodles_types::{NoodlesError, NoodlesResult};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`ApiKey::from_env`]
pub const API_KEY_ENV: &str = "NOODLES_API_KEY";

/// Noodles API key, sent as `x-api-key` on every request
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create an API key
    ///
    /// Fails with a configuration error if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> NoodlesResult<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(NoodlesError::configuration("API key is required"));
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Create an API key from the `NOODLES_API_KEY` environment variable
    pub fn from_env() -> NoodlesResult<Self> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| {
            NoodlesError::configuration(format!("environment variable not set: {API_KEY_ENV}"))
        })?;
        Self::new(key)
    }

    /// Header value for the key, flagged sensitive
    pub(crate) fn header_value(&self) -> NoodlesResult<HeaderValue> {
        let mut value = HeaderValue::from_str(self.0.expose_secret()).map_err(|_| {
            NoodlesError::configuration("API key contains characters not allowed in a header")
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.0.expose_secret().to_owned()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl FromStr for ApiKey {
    type Err = NoodlesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noodles_types::ErrorKind;

    #[test]
    fn test_empty_key_rejected() {
        for key in ["", "   ", "\n"] {
            let err = ApiKey::new(key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn test_debug_redacts() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let printed = format!("{:?}", key);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let key: ApiKey = " abc123 ".parse().unwrap();
        let value = key.header_value().unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "abc123");
    }

    #[test]
    fn test_newline_in_key_rejected() {
        let key = ApiKey::new("abc\r\ndef").unwrap();
        assert_eq!(key.header_value().unwrap_err().kind(), ErrorKind::Configuration);
    }
}
