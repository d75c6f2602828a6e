//! Bucket, ScorePeriod, BuySellDuration, and LiquidityAction enums

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NoodlesError;

/// Candle width in minutes for time-series endpoints
///
/// Serialized as its integer minute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Bucket {
    /// 1 minute
    M1 = 1,
    /// 5 minutes
    M5 = 5,
    /// 15 minutes
    M15 = 15,
    /// 1 hour
    #[default]
    H1 = 60,
    /// 4 hours
    H4 = 240,
    /// 1 day
    D1 = 1440,
    /// 1 week
    W1 = 10080,
    /// 1 month (30 days)
    Mo1 = 43200,
}

impl Bucket {
    /// Every supported bucket, narrowest first
    pub const ALL: [Bucket; 8] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::H1,
        Self::H4,
        Self::D1,
        Self::W1,
        Self::Mo1,
    ];

    /// Get the bucket width in minutes
    pub fn as_minutes(&self) -> u32 {
        *self as u32
    }

    /// Get the bucket width in seconds
    pub fn as_seconds(&self) -> i64 {
        i64::from(self.as_minutes()) * 60
    }
}

impl TryFrom<u32> for Bucket {
    type Error = NoodlesError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_minutes() == minutes)
            .ok_or_else(|| {
                NoodlesError::invalid_request(format!(
                    "invalid bucket: {minutes} (supported: 1, 5, 15, 60, 240, 1440, 10080, 43200)"
                ))
            })
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_minutes())
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = u32::deserialize(deserializer)?;
        Self::try_from(minutes).map_err(serde::de::Error::custom)
    }
}

/// Window used to compute the trending score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScorePeriod {
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "6h")]
    H6,
    #[serde(rename = "24h")]
    #[default]
    H24,
}

impl ScorePeriod {
    /// Returns the period as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::H6 => "6h",
            Self::H24 => "24h",
        }
    }
}

/// Lookback window for buy/sell statistics
///
/// Note the API mixes case here (`1H` but `1d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuySellDuration {
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "1H")]
    H1,
    #[serde(rename = "4H")]
    H4,
    #[serde(rename = "6H")]
    H6,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1w")]
    W1,
}

impl BuySellDuration {
    /// Returns the duration as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M30 => "30m",
            Self::H1 => "1H",
            Self::H4 => "4H",
            Self::H6 => "6H",
            Self::D1 => "1d",
            Self::W1 => "1w",
        }
    }
}

/// Liquidity event filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityAction {
    /// Liquidity added to the pool
    Join,
    /// Liquidity removed from the pool
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_bucket_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Bucket::H1).unwrap(), "60");
        assert_eq!(serde_json::to_string(&Bucket::Mo1).unwrap(), "43200");

        let parsed: Bucket = serde_json::from_str("240").unwrap();
        assert_eq!(parsed, Bucket::H4);
    }

    #[rstest]
    #[case(1, Bucket::M1)]
    #[case(15, Bucket::M15)]
    #[case(1440, Bucket::D1)]
    #[case(10080, Bucket::W1)]
    fn test_bucket_try_from(#[case] minutes: u32, #[case] expected: Bucket) {
        assert_eq!(Bucket::try_from(minutes).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(30)]
    #[case(120)]
    fn test_bucket_rejects_unsupported(#[case] minutes: u32) {
        let err = Bucket::try_from(minutes).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidRequest);
        assert!(serde_json::from_str::<Bucket>(&minutes.to_string()).is_err());
    }

    #[test]
    fn test_bucket_seconds() {
        assert_eq!(Bucket::M5.as_seconds(), 300);
        assert_eq!(Bucket::D1.as_seconds(), 86_400);
    }

    #[test]
    fn test_period_serde() {
        assert_eq!(serde_json::to_string(&ScorePeriod::M30).unwrap(), "\"30m\"");
        assert_eq!(serde_json::to_string(&ScorePeriod::H24).unwrap(), "\"24h\"");
        assert_eq!(serde_json::to_string(&BuySellDuration::H4).unwrap(), "\"4H\"");
        assert_eq!(serde_json::to_string(&BuySellDuration::D1).unwrap(), "\"1d\"");
        assert_eq!(serde_json::to_string(&LiquidityAction::Exit).unwrap(), "\"exit\"");
    }

    #[test]
    fn test_as_str_matches_serde() {
        for p in [ScorePeriod::M30, ScorePeriod::H1, ScorePeriod::H4, ScorePeriod::H6, ScorePeriod::H24] {
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{}\"", p.as_str()));
        }
        for d in [
            BuySellDuration::M30,
            BuySellDuration::H1,
            BuySellDuration::H4,
            BuySellDuration::H6,
            BuySellDuration::D1,
            BuySellDuration::W1,
        ] {
            assert_eq!(serde_json::to_string(&d).unwrap(), format!("\"{}\"", d.as_str()));
        }
    }
}
