//! Portfolio types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::DataList;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PortfolioCoinsParams {
    /// Wallet address
    #[builder(setter(into))]
    pub address: String,
}

/// One coin held by a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinHolding {
    pub coin_type: String,
    pub symbol: String,
    pub decimals: u8,
    pub icon_url: Option<String>,
    pub amount: f64,
    pub usd_value: f64,
    pub verified: bool,
    pub price: f64,
    pub pnl_today: Option<f64>,
    pub pnl_percent_today: Option<f64>,
    pub price_change_1d: Option<f64>,
    pub price_change_7d: Option<f64>,
    pub price_change_30d: Option<f64>,
}

pub type PortfolioCoinsData = DataList<CoinHolding>;

impl DataList<CoinHolding> {
    /// Total USD value across all holdings
    pub fn total_usd_value(&self) -> Decimal {
        self.data
            .iter()
            .filter_map(|h| Decimal::try_from(h.usd_value).ok())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_usd_value() {
        let raw = r#"{"data": [
            {"coin_type": "0x2::sui::SUI", "symbol": "SUI", "decimals": 9, "icon_url": null,
             "amount": 10.0, "usd_value": 15.25, "verified": true, "price": 1.525,
             "pnl_today": null, "pnl_percent_today": null, "price_change_1d": 2.1,
             "price_change_7d": null, "price_change_30d": null},
            {"coin_type": "0xdba3::usdc::USDC", "symbol": "USDC", "decimals": 6, "icon_url": "https://x/usdc.png",
             "amount": 4.75, "usd_value": 4.75, "verified": true, "price": 1.0,
             "pnl_today": 0.0, "pnl_percent_today": 0.0, "price_change_1d": 0.0,
             "price_change_7d": 0.0, "price_change_30d": 0.0}
        ]}"#;
        let holdings: PortfolioCoinsData = serde_json::from_str(raw).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings.total_usd_value(), dec!(20.00));
    }
}
