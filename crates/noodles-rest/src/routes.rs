//! Static endpoint table
//!
//! Every facade method binds exactly one of these routes.

/// HTTP verb of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verb {
    Get,
    #[default]
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One endpoint of the Noodles API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub verb: Verb,
    pub path: &'static str,
    /// Whether the endpoint reads the `x-chain` header
    pub chain_scoped: bool,
}

impl Route {
    const fn get(path: &'static str) -> Self {
        Self {
            verb: Verb::Get,
            path,
            chain_scoped: false,
        }
    }

    const fn post(path: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            path,
            chain_scoped: false,
        }
    }

    const fn with_chain(self) -> Self {
        Self {
            chain_scoped: true,
            ..self
        }
    }
}

/// Common prefix of all partner endpoints
pub const API_PREFIX: &str = "/api/v1/partner";

// ============================================================================
// Coin
// ============================================================================

pub const COIN_DETAIL: Route = Route::get("/api/v1/partner/coin-detail").with_chain();
pub const COIN_TRENDING: Route = Route::post("/api/v1/partner/coin-trending");
pub const COIN_TOP: Route = Route::post("/api/v1/partner/coin-top");
pub const COIN_NEW: Route = Route::post("/api/v1/partner/coin-new");
pub const COIN_PRICE: Route = Route::get("/api/v1/partner/coin-price").with_chain();
pub const COIN_PRICE_MULTI: Route = Route::post("/api/v1/partner/coin-price-multi").with_chain();
pub const COIN_PRICE_MULTI_GET: Route = Route::get("/api/v1/partner/coin-price-multi").with_chain();
pub const COIN_PRICE_VOLUME: Route = Route::get("/api/v1/partner/coin-price-volume");
pub const COIN_PRICE_VOLUME_MULTI: Route =
    Route::post("/api/v1/partner/coin-price-volume-multi").with_chain();
pub const COIN_HISTORICAL_PRICE: Route =
    Route::get("/api/v1/partner/coin-historical-price").with_chain();
pub const COIN_BASIC_METRIC_MULTI: Route =
    Route::post("/api/v1/partner/coin-basic-metric-multi").with_chain();
pub const COIN_BUY_SELL: Route = Route::get("/api/v1/partner/coin-buy-sell");
pub const COIN_INFO_LIST: Route = Route::get("/api/v1/partner/coin-info-list");
pub const COIN_LIQUIDITY: Route = Route::get("/api/v1/partner/coin/liquidity");

// ============================================================================
// Pool
// ============================================================================

pub const POOL_STATS: Route = Route::get("/api/v1/partner/pool/stats");
pub const POOL_STATS_MULTI: Route = Route::get("/api/v1/partner/pool/stats-multi");
pub const POOL_TRADE_EVENTS: Route = Route::get("/api/v1/partner/pool/event/trade");
pub const POOL_LIQUIDITY_EVENTS: Route = Route::get("/api/v1/partner/pool/event/liquidity");
pub const POOL_OHLCV: Route = Route::get("/api/v1/partner/pool/ohlcv");

// ============================================================================
// OHLCV
// ============================================================================

pub const OHLCV: Route = Route::get("/api/v1/partner/ohlcv");
pub const OHLCV_PAIR: Route = Route::get("/api/v1/partner/ohlcv-pair");

// ============================================================================
// Portfolio
// ============================================================================

pub const PORTFOLIO_COINS: Route = Route::get("/api/v1/partner/portfolio/coins");

/// Every route the client knows about
pub const ALL: &[Route] = &[
    COIN_DETAIL,
    COIN_TRENDING,
    COIN_TOP,
    COIN_NEW,
    COIN_PRICE,
    COIN_PRICE_MULTI,
    COIN_PRICE_MULTI_GET,
    COIN_PRICE_VOLUME,
    COIN_PRICE_VOLUME_MULTI,
    COIN_HISTORICAL_PRICE,
    COIN_BASIC_METRIC_MULTI,
    COIN_BUY_SELL,
    COIN_INFO_LIST,
    COIN_LIQUIDITY,
    POOL_STATS,
    POOL_STATS_MULTI,
    POOL_TRADE_EVENTS,
    POOL_LIQUIDITY_EVENTS,
    POOL_OHLCV,
    OHLCV,
    OHLCV_PAIR,
    PORTFOLIO_COINS,
];
