//! Portfolio endpoints

use crate::error::RestResult;
use crate::routes;
use crate::transport::HttpTransport;
use noodles_types::portfolio::{PortfolioCoinsData, PortfolioCoinsParams};
use noodles_types::ApiResponse;
use tracing::instrument;

/// Wallet holdings
pub struct PortfolioEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> PortfolioEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get coins held by a wallet with USD values and PnL
    #[instrument(skip(self))]
    pub async fn get_coins(
        &self,
        params: &PortfolioCoinsParams,
    ) -> RestResult<ApiResponse<PortfolioCoinsData>> {
        self.transport.call(&routes::PORTFOLIO_COINS, params, None).await
    }
}
