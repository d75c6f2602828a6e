//! API endpoint implementations

pub mod coin;
pub mod ohlcv;
pub mod pool;
pub mod portfolio;

pub use coin::CoinEndpoints;
pub use ohlcv::OhlcvEndpoints;
pub use pool::PoolEndpoints;
pub use portfolio::PortfolioEndpoints;
