//! Pool endpoints

use crate::error::RestResult;
use crate::routes;
use crate::transport::HttpTransport;
use noodles_types::pool::{
    PoolLiquidityEventData, PoolLiquidityEventParams, PoolOhlcvData, PoolOhlcvParams, PoolStats,
    PoolStatsMultiData, PoolStatsMultiParams, PoolStatsParams, PoolTradeEventData,
    PoolTradeEventParams,
};
use noodles_types::ApiResponse;
use tracing::instrument;

/// Liquidity pool statistics, events and candles
pub struct PoolEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> PoolEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn get_stats(&self, params: &PoolStatsParams) -> RestResult<ApiResponse<PoolStats>> {
        self.transport.call(&routes::POOL_STATS, params, None).await
    }

    /// Get statistics for several pools at once
    #[instrument(skip(self))]
    pub async fn get_stats_multi(
        &self,
        params: &PoolStatsMultiParams,
    ) -> RestResult<ApiResponse<PoolStatsMultiData>> {
        self.transport.call(&routes::POOL_STATS_MULTI, params, None).await
    }

    /// Get swap events
    ///
    /// Pass `last_cursor` and `last_timestamp` of the previous page as
    /// `cursor` and `timestamp` to continue.
    #[instrument(skip(self))]
    pub async fn get_trade_events(
        &self,
        params: &PoolTradeEventParams,
    ) -> RestResult<ApiResponse<PoolTradeEventData>> {
        self.transport.call(&routes::POOL_TRADE_EVENTS, params, None).await
    }

    /// Get liquidity join and exit events
    #[instrument(skip(self))]
    pub async fn get_liquidity_events(
        &self,
        params: &PoolLiquidityEventParams,
    ) -> RestResult<ApiResponse<PoolLiquidityEventData>> {
        self.transport
            .call(&routes::POOL_LIQUIDITY_EVENTS, params, None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_ohlcv(&self, params: &PoolOhlcvParams) -> RestResult<ApiResponse<PoolOhlcvData>> {
        self.transport.call(&routes::POOL_OHLCV, params, None).await
    }
}
