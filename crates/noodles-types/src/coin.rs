//! Coin information, pricing and liquidity types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

use crate::common::{comma_separated, CoinFilters, OffsetPage, PaginationParams};
use crate::enums::{BuySellDuration, ScorePeriod};

fn parse_decimal(s: &str) -> Option<Decimal> {
    s.parse().ok()
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters that identify a single coin by `coin_id`
///
/// Used by detail, price, price-volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinIdParams {
    /// Full coin type identifier (e.g. `0x2::sui::SUI`)
    #[builder(setter(into))]
    pub coin_id: String,
}

pub type CoinDetailParams = CoinIdParams;
pub type CoinPriceParams = CoinIdParams;
pub type CoinPriceVolumeParams = CoinIdParams;

/// Parameters for the trending list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinTrendingParams {
    pub score_period: ScorePeriod,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationParams>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<CoinFilters>,
}

/// Parameters for the top and new coin lists
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TypedBuilder)]
pub struct CoinListParams {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationParams>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<CoinFilters>,
}

pub type CoinTopParams = CoinListParams;
pub type CoinNewParams = CoinListParams;

/// Parameters for POST multi-coin endpoints (`coin_ids` as a JSON array)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinIdsParams {
    pub coin_ids: Vec<String>,
}

pub type CoinPriceMultiParams = CoinIdsParams;
pub type CoinPriceVolumeMultiParams = CoinIdsParams;
pub type CoinBasicMetricMultiParams = CoinIdsParams;

/// Query form of [`CoinIdsParams`] (`coin_ids` comma-separated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinIdsQuery {
    #[serde(with = "comma_separated")]
    pub coin_ids: Vec<String>,
}

impl From<&CoinIdsParams> for CoinIdsQuery {
    fn from(params: &CoinIdsParams) -> Self {
        Self {
            coin_ids: params.coin_ids.clone(),
        }
    }
}

/// Parameters for the historical price series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinHistoricalPriceParams {
    #[builder(setter(into))]
    pub coin_id: String,
    /// Sample width in minutes
    pub bucket: u32,
    /// Start timestamp in seconds
    pub from: i64,
    /// End timestamp in seconds
    pub to: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinBuySellParams {
    #[builder(setter(into))]
    pub coin_id: String,
    pub duration: BuySellDuration,
}

/// Parameters for the coin info list; all optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TypedBuilder)]
pub struct CoinInfoListParams {
    /// Search by coin type, name or symbol
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CoinLiquidityParams {
    #[builder(setter(into))]
    pub coin_type: String,
}

// ============================================================================
// Coin Detail
// ============================================================================

/// Core information about a coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinObject {
    pub coin_type: String,
    pub symbol: String,
    pub name: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    /// Total liquidity in USD (decimal string)
    pub liquidity: Option<String>,
    pub market_cap: Option<String>,
    /// Fully diluted valuation in USD
    pub fdv: Option<String>,
    pub circulating_supply: Option<String>,
    pub total_supply: Option<String>,
    pub holders: Option<u64>,
    pub creator: Option<String>,
    /// ISO 8601 publish time
    pub published_at: Option<String>,
    pub verified: bool,
    #[serde(default)]
    pub decimals: Option<u8>,
}

impl CoinObject {
    pub fn market_cap_decimal(&self) -> Option<Decimal> {
        self.market_cap.as_deref().and_then(parse_decimal)
    }

    pub fn liquidity_decimal(&self) -> Option<Decimal> {
        self.liquidity.as_deref().and_then(parse_decimal)
    }
}

/// Price and price changes across windows (changes in percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChangeObject {
    /// Current price in USD (decimal string)
    pub price: String,
    pub price_change_1h: Option<f64>,
    pub price_change_6h: Option<f64>,
    pub price_change_1d: Option<f64>,
    pub price_change_7d: Option<f64>,
    pub price_24h_low: Option<String>,
    pub price_24h_high: Option<String>,
    /// All-time high
    pub ath: Option<String>,
    /// All-time low
    pub atl: Option<String>,
}

impl PriceChangeObject {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaObject {
    pub x: Option<String>,
    pub website: Option<String>,
    pub discord: Option<String>,
    pub coingecko_url: Option<String>,
    pub coinmarketcap_url: Option<String>,
    pub docs: Option<String>,
}

/// Category tag (DeFi, Meme, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagObject {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityObject {
    pub mintable: bool,
    pub blacklist: bool,
    /// Percent of supply held by the top 10 holders
    pub top_10_holders: Option<f64>,
}

/// Full coin detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetailData {
    pub coin: CoinObject,
    pub price_change: PriceChangeObject,
    pub social_media: Option<SocialMediaObject>,
    pub tags: Option<Vec<TagObject>>,
    /// Trending rank, if ranked
    pub rank: Option<u32>,
    pub security: Option<SecurityObject>,
}

// ============================================================================
// Ranked Lists
// ============================================================================

/// Trending coin with activity metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub coin_type: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub price: String,
    pub price_change_1d: f64,
    pub price_change_6h: f64,
    pub price_change_4h: f64,
    pub price_change_1h: f64,
    pub price_change_30m: f64,
    pub vol_change_1d: f64,
    pub liq_change_1d: f64,
    pub tx_change_1d: f64,
    pub tx_24h: u64,
    pub volume_24h: String,
    pub volume_6h: String,
    pub volume_4h: String,
    pub volume_30m: String,
    pub maker_24h: u64,
    pub market_cap: String,
    pub liquidity_usd: String,
    pub circulating_supply: String,
    pub total_supply: String,
    pub published_at: String,
    pub verified: bool,
    pub rank: u32,
    pub decimals: u8,
}

impl TrendingCoin {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    pub fn volume_24h_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.volume_24h)
    }
}

/// Coin entry in the top and new lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedCoin {
    pub coin_type: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub price: String,
    pub price_change_1h: f64,
    pub price_change_6h: f64,
    pub price_change_1d: f64,
    pub vol_change_1d: f64,
    pub liq_change_1d: f64,
    pub tx_change_1d: f64,
    pub tx_24h: u64,
    pub volume_24h: String,
    pub maker_24h: u64,
    pub market_cap: String,
    pub liquidity_usd: String,
    pub circulating_supply: String,
    pub total_supply: String,
    pub published_at: String,
    pub verified: bool,
    pub decimals: u8,
}

impl ListedCoin {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    pub fn market_cap_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.market_cap)
    }
}

pub type TopCoin = ListedCoin;
pub type NewCoin = ListedCoin;

pub type CoinTrendingData = OffsetPage<TrendingCoin>;
pub type CoinTopData = OffsetPage<TopCoin>;
pub type CoinNewData = OffsetPage<NewCoin>;

// ============================================================================
// Prices
// ============================================================================

/// Price with changes in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinPriceData {
    pub price: f64,
    pub price_change_24h: Option<f64>,
    pub price_change_7d: Option<f64>,
    pub price_change_30d: Option<f64>,
}

/// Keyed by coin id; `None` for ids the API does not know
pub type CoinPriceMultiData = HashMap<String, Option<CoinPriceData>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinPriceVolumeData {
    pub price: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub volume_change_24h: f64,
}

pub type CoinPriceVolumeMultiData = HashMap<String, CoinPriceVolumeData>;

/// Parallel arrays of sample times and prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinHistoricalPriceData {
    pub timestamp: Vec<i64>,
    pub price: Vec<f64>,
}

impl CoinHistoricalPriceData {
    /// Iterate `(timestamp, price)` pairs
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamp.iter().copied().zip(self.price.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinBasicMetric {
    pub price: f64,
    pub volume_24h: f64,
    pub price_change_1h: f64,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub price_change_30d: f64,
    pub liquidity_usd: f64,
}

pub type CoinBasicMetricMultiData = HashMap<String, CoinBasicMetric>;

// ============================================================================
// Activity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionStats {
    /// Transaction count
    pub tx: u64,
    /// Volume in USD
    pub vol: f64,
    /// Distinct senders
    pub sender: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinBuySellData {
    pub buy: TransactionStats,
    pub sell: TransactionStats,
    pub unique_sender: u64,
    pub unique_tx: u64,
}

impl CoinBuySellData {
    /// Buy volume minus sell volume
    pub fn net_volume(&self) -> f64 {
        self.buy.vol - self.sell.vol
    }
}

/// Entry in the coin info list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub coin_ident: String,
    pub name: String,
    pub symbol: String,
    pub icon_url: String,
    pub decimals: u8,
    pub verified: bool,
    pub volume_24h: Option<f64>,
    pub volume_change_24h: Option<f64>,
    pub price: Option<f64>,
    pub price_change_1d: Option<f64>,
    pub published_at: String,
}

pub type CoinInfoListData = OffsetPage<CoinInfo>;

// ============================================================================
// Liquidity
// ============================================================================

/// Coin reference embedded in pool entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinObjectInPool {
    pub coin_type: String,
    pub symbol: String,
    pub decimals: u8,
    pub icon_url: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexLiquidityPool {
    pub pool_id: String,
    pub protocol: String,
    pub coin_a: CoinObjectInPool,
    pub coin_b: CoinObjectInPool,
    pub amount_a: f64,
    pub amount_b: f64,
    pub amount_a_usd: f64,
    pub amount_b_usd: f64,
    pub price_a: f64,
    pub price_b: f64,
    pub price_ab: f64,
    pub tvl_usd: f64,
    pub fee_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingLiquidityPool {
    pub pool_id: String,
    pub protocol: String,
    pub coin: CoinObjectInPool,
    pub deposit: f64,
    pub deposit_usd: f64,
    pub borrow: f64,
    pub borrow_usd: f64,
    pub deposit_apr: f64,
    pub borrow_apr: f64,
    pub utilization: f64,
}

/// Where a coin's liquidity sits, across DEX pools and lending markets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinLiquidityData {
    pub coin_type: String,
    pub symbol: String,
    pub decimals: u8,
    pub icon_url: Option<String>,
    pub verified: bool,
    pub dex_liquidity: Vec<DexLiquidityPool>,
    pub lending_liquidity: Vec<LendingLiquidityPool>,
}

impl CoinLiquidityData {
    /// Sum of DEX pool TVL in USD
    pub fn dex_tvl_usd(&self) -> f64 {
        self.dex_liquidity.iter().map(|p| p.tvl_usd).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trending_params_body() {
        let params = CoinTrendingParams::builder()
            .score_period(ScorePeriod::H24)
            .pagination(PaginationParams::builder().limit(50).offset(0).build())
            .filters(
                CoinFilters::builder()
                    .coin_ids(vec!["0x2::sui::SUI".to_string()])
                    .build(),
            )
            .build();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["score_period"], "24h");
        assert_eq!(json["pagination"]["limit"], 50);
        assert_eq!(json["filters"]["coin_ids"][0], "0x2::sui::SUI");
    }

    #[test]
    fn test_empty_list_params_serialize_to_empty_object() {
        let json = serde_json::to_string(&CoinListParams::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_coin_ids_query_form() {
        let params = CoinIdsParams::builder()
            .coin_ids(vec!["0x2::sui::SUI".into(), "0xdba3::usdc::USDC".into()])
            .build();
        let query = CoinIdsQuery::from(&params);
        let json = serde_json::to_value(query).unwrap();
        assert_eq!(json["coin_ids"], "0x2::sui::SUI,0xdba3::usdc::USDC");

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["coin_ids"][1], "0xdba3::usdc::USDC");
    }

    #[test]
    fn test_price_multi_allows_null_entries() {
        let raw = r#"{"0x2::sui::SUI": {"price": 1.52, "price_change_24h": 3.1,
                     "price_change_7d": null, "price_change_30d": -4.0},
                     "0xdead::x::X": null}"#;
        let data: CoinPriceMultiData = serde_json::from_str(raw).unwrap();
        assert_eq!(data["0x2::sui::SUI"].unwrap().price, 1.52);
        assert!(data["0xdead::x::X"].is_none());
    }

    #[test]
    fn test_detail_decimal_accessors() {
        let raw = r#"{
            "coin": {
                "coin_type": "0x2::sui::SUI", "symbol": "SUI", "name": "Sui",
                "logo": null, "description": null, "liquidity": "123456789.12",
                "market_cap": "4500000000.5", "fdv": null, "circulating_supply": null,
                "total_supply": "10000000000", "holders": 1200000, "creator": null,
                "published_at": "2023-05-03T00:00:00Z", "verified": true
            },
            "price_change": {
                "price": "1.523456789", "price_change_1h": 0.1, "price_change_6h": null,
                "price_change_1d": -2.5, "price_change_7d": null, "price_24h_low": "1.4",
                "price_24h_high": "1.6", "ath": "5.35", "atl": "0.36"
            },
            "social_media": null,
            "tags": [{"id": 1, "name": "L1"}],
            "rank": null,
            "security": {"mintable": false, "blacklist": false, "top_10_holders": 61.2}
        }"#;
        let detail: CoinDetailData = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.coin.decimals, None);
        assert_eq!(detail.coin.market_cap_decimal(), Some(dec!(4500000000.5)));
        assert_eq!(detail.price_change.price_decimal(), Some(dec!(1.523456789)));
        assert_eq!(detail.tags.unwrap()[0].name, "L1");
    }

    #[test]
    fn test_historical_points() {
        let data = CoinHistoricalPriceData {
            timestamp: vec![100, 200],
            price: vec![1.0, 1.5],
        };
        assert_eq!(data.points().collect::<Vec<_>>(), vec![(100, 1.0), (200, 1.5)]);
    }
}
