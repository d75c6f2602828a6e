//! Liquidity pool types

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{comma_separated, CursorPage, DataList};
use crate::enums::{Bucket, LiquidityAction};
use crate::ohlcv::OhlcvPoint;

// ============================================================================
// Parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PoolStatsParams {
    #[builder(setter(into))]
    pub pool_address: String,
}

/// Sent as one comma-separated `pool_addresses` query value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PoolStatsMultiParams {
    #[serde(with = "comma_separated")]
    pub pool_addresses: Vec<String>,
}

/// Parameters for the trade event feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PoolTradeEventParams {
    #[builder(setter(into))]
    pub pool_address: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Newest first when true
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<bool>,
    /// `last_cursor` from the previous page
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
    /// `last_timestamp` from the previous page
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Parameters for the liquidity event feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PoolLiquidityEventParams {
    #[builder(setter(into))]
    pub pool_address: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Only joins or only exits
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<LiquidityAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct PoolOhlcvParams {
    #[builder(setter(into))]
    pub pool_address: String,
    pub bucket: Bucket,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ============================================================================
// Payloads
// ============================================================================

/// Pool statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    pub pool_address: String,
    pub coin_a_type: String,
    pub coin_b_type: String,
    pub coin_a_symbol: String,
    pub coin_b_symbol: String,
    /// Raw on-chain liquidity (u128 range, kept as a string)
    pub liquidity: String,
    pub amount_a: f64,
    pub amount_b: f64,
    pub amount_a_usd: f64,
    pub amount_b_usd: f64,
    pub tvl_usd: f64,
    pub volume_24h: f64,
    pub volume_1w: f64,
    pub fee_24h: f64,
    pub fee_1w: f64,
    pub fee_rate: f64,
    pub apr_24h: f64,
    pub apr_1w: f64,
}

/// A swap executed in a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    pub id: i64,
    pub timestamp: i64,
    pub action: String,
    pub pool_address: String,
    pub coin_a_type: String,
    pub coin_b_type: String,
    pub coin_a_symbol: String,
    pub coin_b_symbol: String,
    pub price: f64,
    pub amount_a: f64,
    pub amount_b: f64,
    /// Swap direction: coin_a sold for coin_b when true
    pub a_to_b: bool,
    pub tx_digest: String,
    pub sender: String,
    /// Aggregator or frontend that routed the swap
    pub source: Option<String>,
}

/// Liquidity added to or removed from a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityEvent {
    pub id: i64,
    pub timestamp: i64,
    pub action: String,
    pub pool_address: String,
    pub coin_a_type: String,
    pub coin_b_type: String,
    pub coin_a_symbol: String,
    pub coin_b_symbol: String,
    pub amount_a: f64,
    pub amount_b: f64,
    pub tx_digest: String,
    pub sender: String,
}

pub type PoolStatsMultiData = DataList<PoolStats>;
pub type PoolTradeEventData = CursorPage<TradeEvent>;
pub type PoolLiquidityEventData = CursorPage<LiquidityEvent>;
pub type PoolOhlcvData = DataList<OhlcvPoint>;
