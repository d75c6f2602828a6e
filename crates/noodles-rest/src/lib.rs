//! REST API client for the Noodles market-data service
//!
//! This crate provides a typed client for coin, pool, OHLCV and portfolio
//! data. Every call returns the decoded `{code, message, data}` envelope or
//! a classified [`NoodlesError`].
//!
//! # Features
//!
//! - **Coin**: Detail, prices, rankings, buy/sell activity, liquidity
//! - **Pool**: Stats, trade and liquidity events, candles
//! - **OHLCV**: Coin and pair candles
//! - **Portfolio**: Wallet holdings
//!
//! # Example
//!
//! ```no_run
//! use noodles_rest::{ApiKey, NoodlesClient};
//! use noodles_types::coin::CoinPriceParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NoodlesClient::new(ApiKey::new("your-api-key")?)?;
//!
//!     let params = CoinPriceParams::builder().coin_id("0x2::sui::SUI").build();
//!     let price = client.coin().get_price(&params, None).await?.into_payload()?;
//!     println!("SUI: {}", price.price);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors and retries
//!
//! Failures are classified by status code into [`ErrorKind`]s. The client
//! never retries on its own; [`NoodlesError::recovery_strategy`] suggests
//! what a caller may do.

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod prelude;
pub mod routes;
pub mod transport;

// Re-export main types
pub use client::{ClientConfig, NoodlesClient, DEFAULT_BASE_URL};
pub use credentials::{ApiKey, API_KEY_ENV};
pub use error::RestResult;
pub use routes::{Route, Verb};
pub use transport::{AmbientHeaders, HttpTransport};

pub use noodles_types::{ApiResponse, Chain, ErrorKind, NoodlesError, RecoveryStrategy};
