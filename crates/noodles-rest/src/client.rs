//! Main REST client implementation

use crate::credentials::ApiKey;
use crate::endpoints::{CoinEndpoints, OhlcvEndpoints, PoolEndpoints, PortfolioEndpoints};
use crate::error::RestResult;
use crate::transport::HttpTransport;
use std::time::Duration;
use tracing::info;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.noodles.fi";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Noodles REST API client
///
/// Groups the endpoints into four facades that share one transport.
///
/// # Example
///
/// ```no_run
/// use noodles_rest::NoodlesClient;
/// use noodles_types::{ohlcv::OhlcvPairParams, Bucket};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NoodlesClient::from_env()?;
///
///     let params = OhlcvPairParams::builder()
///         .coin_a("0x2::sui::SUI")
///         .coin_b("0xdba3::usdc::USDC")
///         .bucket(Bucket::H1)
///         .build();
///     let candles = client.ohlcv().get_pair(&params).await?.into_payload()?;
///     println!("{} candles", candles.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NoodlesClient {
    transport: HttpTransport,
}

impl NoodlesClient {
    /// Create a client against the production API
    pub fn new(api_key: ApiKey) -> RestResult<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(&api_key, &config)?;
        info!("Created Noodles REST client");
        Ok(Self { transport })
    }

    /// Create a client using `NOODLES_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        Self::new(ApiKey::from_env()?)
    }

    /// Underlying transport, for calling routes directly
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    // ========================================================================
    // Facades
    // ========================================================================

    /// Coin metadata, prices, rankings and liquidity
    pub fn coin(&self) -> CoinEndpoints<'_> {
        CoinEndpoints::new(&self.transport)
    }

    /// Pool statistics, events and candles
    pub fn pool(&self) -> PoolEndpoints<'_> {
        PoolEndpoints::new(&self.transport)
    }

    /// Coin and pair candles
    pub fn ohlcv(&self) -> OhlcvEndpoints<'_> {
        OhlcvEndpoints::new(&self.transport)
    }

    /// Wallet holdings
    pub fn portfolio(&self) -> PortfolioEndpoints<'_> {
        PortfolioEndpoints::new(&self.transport)
    }
}

impl std::fmt::Debug for NoodlesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoodlesClient")
            .field("base_url", &self.transport.base_url())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host the API paths are appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("noodles-rest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noodles_types::ErrorKind;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("noodles-rest/"));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = NoodlesClient::new(ApiKey::new("secret-key-123").unwrap()).unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("secret-key-123"));
        assert!(printed.contains("api.noodles.fi"));
    }

    #[test]
    fn test_bad_base_url_is_configuration_error() {
        let err = NoodlesClient::with_config(
            ApiKey::new("key").unwrap(),
            ClientConfig::new().with_base_url("::"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
