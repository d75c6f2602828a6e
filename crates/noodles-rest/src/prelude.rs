//! Convenient imports for common usage
//!
//! ```no_run
//! use noodles_rest::prelude::*;
//! ```

pub use crate::client::{ClientConfig, NoodlesClient};
pub use crate::credentials::ApiKey;
pub use crate::error::RestResult;
pub use crate::routes::Verb;

pub use noodles_types::coin::{
    CoinBuySellParams, CoinDetailParams, CoinHistoricalPriceParams, CoinIdsParams,
    CoinInfoListParams, CoinListParams, CoinLiquidityParams, CoinPriceParams, CoinTrendingParams,
};
pub use noodles_types::ohlcv::{OhlcvPairParams, OhlcvParams};
pub use noodles_types::pool::{
    PoolLiquidityEventParams, PoolOhlcvParams, PoolStatsMultiParams, PoolStatsParams,
    PoolTradeEventParams,
};
pub use noodles_types::portfolio::PortfolioCoinsParams;
pub use noodles_types::{
    ApiResponse, Bucket, BuySellDuration, Chain, Decimal, ErrorKind, LiquidityAction,
    NoodlesError, RecoveryStrategy, ScorePeriod,
};
