//! Shared types for the Noodles market-data REST API
//!
//! This crate provides the core type definitions used across the Noodles SDK.
//! It has no HTTP dependency and can be used independently, e.g. to decode
//! recorded API responses.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - The `{code, message, data}` envelope every endpoint returns
//! - [`NoodlesError`], [`ErrorKind`] - Closed error taxonomy with status-code classification
//! - [`RecoveryStrategy`] - Advisory retry hints (the SDK itself never retries)
//! - [`Bucket`], [`ScorePeriod`], [`BuySellDuration`], [`LiquidityAction`] - Parameter enums
//! - [`Chain`] - Target chain selector sent as a per-request header
//! - [`coin`], [`pool`], [`ohlcv`], [`portfolio`] - Request parameters and payloads per resource

pub mod chain;
pub mod coin;
pub mod common;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod error_codes;
pub mod ohlcv;
pub mod pool;
pub mod portfolio;

// Re-export commonly used types
pub use chain::*;
pub use common::*;
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use error_codes::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
