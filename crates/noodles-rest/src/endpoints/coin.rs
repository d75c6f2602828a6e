//! Coin endpoints
//!
//! Methods on chain-scoped endpoints take an optional [`Chain`]; `None`
//! selects the default chain.

use crate::error::RestResult;
use crate::routes::{self, Verb};
use crate::transport::HttpTransport;
use noodles_types::coin::{
    CoinBasicMetricMultiData, CoinBasicMetricMultiParams, CoinBuySellData, CoinBuySellParams,
    CoinDetailData, CoinDetailParams, CoinHistoricalPriceData, CoinHistoricalPriceParams,
    CoinIdsQuery, CoinInfoListData, CoinInfoListParams, CoinLiquidityData, CoinLiquidityParams,
    CoinNewData, CoinNewParams, CoinPriceData, CoinPriceMultiData, CoinPriceMultiParams,
    CoinPriceParams, CoinPriceVolumeData, CoinPriceVolumeMultiData, CoinPriceVolumeMultiParams,
    CoinPriceVolumeParams, CoinTopData, CoinTopParams, CoinTrendingData, CoinTrendingParams,
};
use noodles_types::{ApiResponse, Chain};
use tracing::{debug, instrument};

/// Coin metadata, pricing, rankings and liquidity
pub struct CoinEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> CoinEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get full coin detail: metadata, price changes, socials, tags and
    /// security flags
    #[instrument(skip(self))]
    pub async fn get_detail(
        &self,
        params: &CoinDetailParams,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<CoinDetailData>> {
        self.transport.call(&routes::COIN_DETAIL, params, chain).await
    }

    /// Get trending coins ranked over a score period
    #[instrument(skip(self))]
    pub async fn get_trending(
        &self,
        params: &CoinTrendingParams,
    ) -> RestResult<ApiResponse<CoinTrendingData>> {
        self.transport.call(&routes::COIN_TRENDING, params, None).await
    }

    /// Get top coins
    #[instrument(skip(self))]
    pub async fn get_top(&self, params: &CoinTopParams) -> RestResult<ApiResponse<CoinTopData>> {
        self.transport.call(&routes::COIN_TOP, params, None).await
    }

    /// Get newly listed coins
    #[instrument(skip(self))]
    pub async fn get_new(&self, params: &CoinNewParams) -> RestResult<ApiResponse<CoinNewData>> {
        self.transport.call(&routes::COIN_NEW, params, None).await
    }

    /// Get the current price of one coin
    #[instrument(skip(self))]
    pub async fn get_price(
        &self,
        params: &CoinPriceParams,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<CoinPriceData>> {
        self.transport.call(&routes::COIN_PRICE, params, chain).await
    }

    /// Get current prices of several coins
    ///
    /// With [`Verb::Get`] the ids go out comma-separated in the query;
    /// with [`Verb::Post`] (the default) as a JSON array. Coins the API
    /// does not know map to `None`.
    #[instrument(skip(self))]
    pub async fn get_price_multi(
        &self,
        params: &CoinPriceMultiParams,
        chain: Option<&Chain>,
        verb: Verb,
    ) -> RestResult<ApiResponse<CoinPriceMultiData>> {
        debug!(coins = params.coin_ids.len(), verb = verb.as_str(), "Fetching prices");
        match verb {
            Verb::Get => {
                let query = CoinIdsQuery::from(params);
                self.transport
                    .call(&routes::COIN_PRICE_MULTI_GET, &query, chain)
                    .await
            }
            Verb::Post => {
                self.transport
                    .call(&routes::COIN_PRICE_MULTI, params, chain)
                    .await
            }
        }
    }

    /// Get price and 24h volume of one coin
    #[instrument(skip(self))]
    pub async fn get_price_volume(
        &self,
        params: &CoinPriceVolumeParams,
    ) -> RestResult<ApiResponse<CoinPriceVolumeData>> {
        self.transport.call(&routes::COIN_PRICE_VOLUME, params, None).await
    }

    /// Get price and 24h volume of several coins
    #[instrument(skip(self))]
    pub async fn get_price_volume_multi(
        &self,
        params: &CoinPriceVolumeMultiParams,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<CoinPriceVolumeMultiData>> {
        self.transport
            .call(&routes::COIN_PRICE_VOLUME_MULTI, params, chain)
            .await
    }

    /// Get a historical price series
    ///
    /// # Arguments
    /// * `params.bucket` - Sample width in minutes
    /// * `params.from`, `params.to` - Range in seconds
    #[instrument(skip(self))]
    pub async fn get_historical_price(
        &self,
        params: &CoinHistoricalPriceParams,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<CoinHistoricalPriceData>> {
        self.transport
            .call(&routes::COIN_HISTORICAL_PRICE, params, chain)
            .await
    }

    /// Get price, volume, change and liquidity metrics for several coins
    #[instrument(skip(self))]
    pub async fn get_basic_metric_multi(
        &self,
        params: &CoinBasicMetricMultiParams,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<CoinBasicMetricMultiData>> {
        self.transport
            .call(&routes::COIN_BASIC_METRIC_MULTI, params, chain)
            .await
    }

    /// Get buy and sell activity over a duration
    #[instrument(skip(self))]
    pub async fn get_buy_sell(
        &self,
        params: &CoinBuySellParams,
    ) -> RestResult<ApiResponse<CoinBuySellData>> {
        self.transport.call(&routes::COIN_BUY_SELL, params, None).await
    }

    /// Search or list coin metadata
    #[instrument(skip(self))]
    pub async fn get_info_list(
        &self,
        params: &CoinInfoListParams,
    ) -> RestResult<ApiResponse<CoinInfoListData>> {
        self.transport.call(&routes::COIN_INFO_LIST, params, None).await
    }

    /// Get DEX and lending liquidity for a coin
    #[instrument(skip(self))]
    pub async fn get_liquidity(
        &self,
        params: &CoinLiquidityParams,
    ) -> RestResult<ApiResponse<CoinLiquidityData>> {
        self.transport.call(&routes::COIN_LIQUIDITY, params, None).await
    }
}
