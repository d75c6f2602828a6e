//! Target chain selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NoodlesError;

/// Chain a request targets, sent as the `x-chain` header
///
/// Endpoints that accept it default to [`Chain::SUI`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain(String);

impl Chain {
    /// Sui mainnet
    pub const SUI: &'static str = "sui";

    /// Create a new chain selector without validation
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The default chain
    pub fn sui() -> Self {
        Self::new(Self::SUI)
    }

    /// Get the chain as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::sui()
    }
}

impl FromStr for Chain {
    type Err = NoodlesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NoodlesError::invalid_request("chain must not be empty"));
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err(NoodlesError::invalid_request(format!("invalid chain: {s}")));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Chain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
