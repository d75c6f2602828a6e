//! Status-code classification and recovery hints
//!
//! The Noodles API reports failures as `{code, message, data}` where `code`
//! mirrors an HTTP status. This module maps that code onto the closed
//! [`ErrorKind`] set and attaches an advisory [`RecoveryStrategy`].

use std::fmt;
use std::time::Duration;

/// Recovery strategy for handling API errors
///
/// These are hints for callers. The SDK performs no retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecoveryStrategy {
    /// Exponential backoff before retry
    Backoff {
        initial_ms: u64,
        max_ms: u64,
        multiplier: u32, // Multiplier as integer (e.g., 2 = 2x)
    },
    /// Fixed delay retry
    Retry { delay_ms: u64, max_attempts: u32 },
    /// Cannot recover programmatically - fix the request or credentials
    Fatal,
    /// Manual investigation needed
    #[default]
    Manual,
}

impl RecoveryStrategy {
    /// Default exponential backoff for rate limits
    pub fn rate_limit_backoff() -> Self {
        Self::Backoff {
            initial_ms: 1000,
            max_ms: 60000,
            multiplier: 2,
        }
    }

    /// Default backoff for transient server and network failures
    pub fn service_retry() -> Self {
        Self::Backoff {
            initial_ms: 500,
            max_ms: 30000,
            multiplier: 2,
        }
    }

    /// Get the initial delay duration
    pub fn initial_delay(&self) -> Option<Duration> {
        match self {
            Self::Backoff { initial_ms, .. } => Some(Duration::from_millis(*initial_ms)),
            Self::Retry { delay_ms, .. } => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }
    }

    /// Delay before retry number `attempt` (0-based), capped at `max_ms`
    ///
    /// Returns `None` when the strategy does not allow another attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        match self {
            Self::Backoff {
                initial_ms,
                max_ms,
                multiplier,
            } => {
                let factor = u64::from(*multiplier).saturating_pow(attempt);
                let delay = initial_ms.saturating_mul(factor).min(*max_ms);
                Some(Duration::from_millis(delay))
            }
            Self::Retry {
                delay_ms,
                max_attempts,
            } if attempt < *max_attempts => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }
    }

    /// Check if this strategy allows retry
    pub fn allows_retry(&self) -> bool {
        matches!(self, Self::Backoff { .. } | Self::Retry { .. })
    }
}

/// Discriminant of [`NoodlesError`](crate::NoodlesError)
///
/// Lets callers branch on the failure class without looking at
/// `status_code` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 - malformed parameters, unknown coin ids
    BadRequest,
    /// 401 - missing, invalid or expired API key
    Unauthorized,
    /// 429 - too many requests
    RateLimited,
    /// 500 - failure on the vendor side
    InternalServer,
    /// Any other code received in a response
    Unclassified,
    /// No HTTP response at all (connect failure, timeout)
    Network,
    /// Client could not be constructed
    Configuration,
    /// Success envelope without a payload
    UnexpectedEmptyPayload,
    /// Request could not be built locally
    InvalidRequest,
    /// Response body did not match the expected shape
    Decode,
}

impl ErrorKind {
    /// Classify a vendor status code
    ///
    /// Total over `u16`: anything outside the four dedicated codes is
    /// [`ErrorKind::Unclassified`].
    pub fn from_status_code(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            500 => Self::InternalServer,
            _ => Self::Unclassified,
        }
    }

    /// Returns the error kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate_limited",
            Self::InternalServer => "internal_server",
            Self::Unclassified => "unclassified",
            Self::Network => "network",
            Self::Configuration => "configuration",
            Self::UnexpectedEmptyPayload => "unexpected_empty_payload",
            Self::InvalidRequest => "invalid_request",
            Self::Decode => "decode",
        }
    }

    /// Recovery strategy for this class of failure
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            Self::RateLimited => RecoveryStrategy::rate_limit_backoff(),
            Self::InternalServer | Self::Network => RecoveryStrategy::service_retry(),
            Self::BadRequest
            | Self::Unauthorized
            | Self::Configuration
            | Self::InvalidRequest
            | Self::Decode => RecoveryStrategy::Fatal,
            Self::Unclassified | Self::UnexpectedEmptyPayload => RecoveryStrategy::Manual,
        }
    }

    /// Returns true if the failure was reported by the remote service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Unauthorized
                | Self::RateLimited
                | Self::InternalServer
                | Self::Unclassified
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400, ErrorKind::BadRequest)]
    #[case(401, ErrorKind::Unauthorized)]
    #[case(429, ErrorKind::RateLimited)]
    #[case(500, ErrorKind::InternalServer)]
    #[case(403, ErrorKind::Unclassified)]
    #[case(404, ErrorKind::Unclassified)]
    #[case(502, ErrorKind::Unclassified)]
    #[case(503, ErrorKind::Unclassified)]
    #[case(0, ErrorKind::Unclassified)]
    fn test_from_status_code(#[case] code: u16, #[case] expected: ErrorKind) {
        assert_eq!(ErrorKind::from_status_code(code), expected);
    }

    #[test]
    fn test_retry_hints() {
        assert!(ErrorKind::RateLimited.recovery_strategy().allows_retry());
        assert!(ErrorKind::InternalServer.recovery_strategy().allows_retry());
        assert!(ErrorKind::Network.recovery_strategy().allows_retry());
        assert!(!ErrorKind::BadRequest.recovery_strategy().allows_retry());
        assert!(!ErrorKind::Unauthorized.recovery_strategy().allows_retry());
        assert!(!ErrorKind::Configuration.recovery_strategy().allows_retry());
    }

    #[test]
    fn test_backoff_delays() {
        let strategy = RecoveryStrategy::Backoff {
            initial_ms: 100,
            max_ms: 1000,
            multiplier: 2,
        };
        assert_eq!(strategy.delay_for_attempt(0), Some(Duration::from_millis(100)));
        assert_eq!(strategy.delay_for_attempt(1), Some(Duration::from_millis(200)));
        assert_eq!(strategy.delay_for_attempt(3), Some(Duration::from_millis(800)));
        assert_eq!(strategy.delay_for_attempt(4), Some(Duration::from_millis(1000)));
        assert_eq!(strategy.delay_for_attempt(40), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_fixed_retry_exhausts() {
        let strategy = RecoveryStrategy::Retry {
            delay_ms: 250,
            max_attempts: 2,
        };
        assert_eq!(strategy.delay_for_attempt(1), Some(Duration::from_millis(250)));
        assert_eq!(strategy.delay_for_attempt(2), None);
        assert_eq!(RecoveryStrategy::Fatal.delay_for_attempt(0), None);
    }
}
