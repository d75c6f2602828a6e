//! OHLCV candle types
//!
//! Candles arrive as fixed-width JSON arrays, ordered ascending by
//! timestamp. They are modelled as tuple structs and decoded by position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::DataList;
use crate::enums::Bucket;

/// Parameters for OHLCV candles of a single coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct OhlcvParams {
    /// Full coin type identifier
    #[builder(setter(into))]
    pub coin_id: String,
    /// Candle width
    pub bucket: Bucket,
    /// Start timestamp in seconds (most recent data if unset)
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// End timestamp in seconds (now if unset)
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Maximum number of candles
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Parameters for OHLCV candles of a trading pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct OhlcvPairParams {
    /// Full coin type identifier of the base coin
    #[builder(setter(into))]
    pub coin_a: String,
    /// Full coin type identifier of the quote coin
    #[builder(setter(into))]
    pub coin_b: String,
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

/// `(timestamp, open, high, low, close, volume)`
///
/// Timestamp in seconds, prices in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvPoint(pub i64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl OhlcvPoint {
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    pub fn open(&self) -> f64 {
        self.1
    }

    pub fn high(&self) -> f64 {
        self.2
    }

    pub fn low(&self) -> f64 {
        self.3
    }

    pub fn close(&self) -> f64 {
        self.4
    }

    pub fn volume(&self) -> f64 {
        self.5
    }

    /// Candle open time
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

/// `(timestamp, open, high, low, close, volume_a, volume_b)`
///
/// Prices are the `coin_a / coin_b` ratio; volumes are per coin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvPairPoint(
    pub i64,
    pub f64,
    pub f64,
    pub f64,
    pub f64,
    pub f64,
    pub f64,
);

impl OhlcvPairPoint {
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    pub fn open(&self) -> f64 {
        self.1
    }

    pub fn high(&self) -> f64 {
        self.2
    }

    pub fn low(&self) -> f64 {
        self.3
    }

    pub fn close(&self) -> f64 {
        self.4
    }

    /// Volume traded in `coin_a`
    pub fn volume_a(&self) -> f64 {
        self.5
    }

    /// Volume traded in `coin_b`
    pub fn volume_b(&self) -> f64 {
        self.6
    }

    /// Candle open time
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

/// Candles for a single coin
pub type OhlcvData = DataList<OhlcvPoint>;

/// Candles for a trading pair
pub type OhlcvPairData = DataList<OhlcvPairPoint>;
