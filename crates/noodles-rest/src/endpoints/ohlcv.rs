//! OHLCV endpoints

use crate::error::RestResult;
use crate::routes;
use crate::transport::HttpTransport;
use noodles_types::ohlcv::{OhlcvData, OhlcvPairData, OhlcvPairParams, OhlcvParams};
use noodles_types::ApiResponse;
use tracing::instrument;

/// Candles for a coin or a pair
pub struct OhlcvEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> OhlcvEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get candles for one coin
    ///
    /// Each point is `(timestamp, open, high, low, close, volume)`.
    #[instrument(skip(self))]
    pub async fn get(&self, params: &OhlcvParams) -> RestResult<ApiResponse<OhlcvData>> {
        self.transport.call(&routes::OHLCV, params, None).await
    }

    /// Get candles for a pair
    ///
    /// Each point is `(timestamp, open, high, low, close, volume_a, volume_b)`.
    #[instrument(skip(self))]
    pub async fn get_pair(&self, params: &OhlcvPairParams) -> RestResult<ApiResponse<OhlcvPairData>> {
        self.transport.call(&routes::OHLCV_PAIR, params, None).await
    }
}
