//! Common test utilities and fixtures for integration tests
//!
//! Payloads mirror responses captured from the Noodles partner API.

#![allow(dead_code)]

use std::time::Duration;

use noodles_rest::{ApiKey, ClientConfig, NoodlesClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-partner-key";

pub const SUI: &str = "0x2::sui::SUI";
pub const USDC: &str =
    "0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC";
pub const POOL: &str = "0xb8d7d9e66a60c239e7a60110efcf8de6c705580ed924d0dde141f4a0e2c90105";
pub const WALLET: &str = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> NoodlesClient {
    client_with(server, ClientConfig::new())
}

pub fn client_with(server: &MockServer, config: ClientConfig) -> NoodlesClient {
    let key = ApiKey::new(TEST_API_KEY).unwrap();
    NoodlesClient::with_config(key, config.with_base_url(server.uri())).unwrap()
}

/// Client that can never connect
pub fn unreachable_client(timeout: Duration) -> NoodlesClient {
    let key = ApiKey::new(TEST_API_KEY).unwrap();
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(timeout);
    NoodlesClient::with_config(key, config).unwrap()
}

/// Successful envelope around `data`
pub fn ok(data: Value) -> Value {
    json!({"code": 200, "message": "OK", "data": data})
}

/// Vendor error body
pub fn vendor_error(code: u16, message: &str) -> Value {
    json!({"code": code, "message": message, "data": null})
}

/// Five hourly SUI/USDC candles, ascending
pub fn ohlcv_pair_rows() -> Value {
    json!([
        [1717200000, 1.02, 1.05, 1.01, 1.04, 120000.5, 124800.2],
        [1717203600, 1.04, 1.06, 1.03, 1.05, 98000.0, 102900.0],
        [1717207200, 1.05, 1.05, 0.99, 1.00, 150000.0, 151500.0],
        [1717210800, 1.00, 1.02, 0.98, 1.01, 87000.25, 87870.0],
        [1717214400, 1.01, 1.03, 1.00, 1.03, 64000.0, 65920.0]
    ])
}

pub fn ohlcv_rows() -> Value {
    json!([
        [1717200000, 1.02, 1.05, 1.01, 1.04, 120000.5],
        [1717203600, 1.04, 1.06, 1.03, 1.05, 98000.0]
    ])
}

pub fn coin_detail(symbol: &str) -> Value {
    json!({
        "coin": {
            "coin_type": SUI,
            "symbol": symbol,
            "name": "Sui",
            "logo": "https://strapi-dev.scand.app/uploads/sui_c07df05f00.png",
            "description": "Sui is a Layer 1 blockchain",
            "liquidity": "41234567.89",
            "market_cap": "3456789012.34",
            "fdv": "10456789012.00",
            "circulating_supply": "3300000000",
            "total_supply": "10000000000",
            "holders": 4521987,
            "creator": null,
            "published_at": "2023-05-03T00:00:00Z",
            "verified": true,
            "decimals": 9
        },
        "price_change": {
            "price": "1.0475",
            "price_change_1h": 0.12,
            "price_change_6h": -0.85,
            "price_change_1d": 2.31,
            "price_change_7d": 5.4,
            "price_24h_low": "1.0021",
            "price_24h_high": "1.0602",
            "ath": "5.35",
            "atl": "0.36"
        },
        "social_media": {
            "x": "https://x.com/SuiNetwork",
            "website": "https://sui.io",
            "discord": null,
            "coingecko_url": null,
            "coinmarketcap_url": null,
            "docs": "https://docs.sui.io"
        },
        "tags": [{"id": 1, "name": "Layer 1"}],
        "rank": 3,
        "security": {"mintable": false, "blacklist": false, "top_10_holders": 61.2}
    })
}

pub fn coin_price() -> Value {
    json!({
        "price": 1.0475,
        "price_change_24h": 2.31,
        "price_change_7d": 5.4,
        "price_change_30d": null
    })
}

pub fn pool_stats() -> Value {
    json!({
        "pool_address": POOL,
        "coin_a_type": SUI,
        "coin_b_type": USDC,
        "coin_a_symbol": "SUI",
        "coin_b_symbol": "USDC",
        "liquidity": "340282366920938463463374607431768211455",
        "amount_a": 1523000.5,
        "amount_b": 1601000.25,
        "amount_a_usd": 1595342.5,
        "amount_b_usd": 1601000.25,
        "tvl_usd": 3196342.75,
        "volume_24h": 845000.0,
        "volume_1w": 6120000.0,
        "fee_24h": 2112.5,
        "fee_1w": 15300.0,
        "fee_rate": 0.0025,
        "apr_24h": 24.1,
        "apr_1w": 25.0
    })
}

pub fn trade_events() -> Value {
    json!({
        "data": [{
            "id": 9912,
            "timestamp": 1717214400,
            "action": "swap",
            "pool_address": POOL,
            "coin_a_type": SUI,
            "coin_b_type": USDC,
            "coin_a_symbol": "SUI",
            "coin_b_symbol": "USDC",
            "price": 1.03,
            "amount_a": 100.0,
            "amount_b": 103.0,
            "a_to_b": true,
            "tx_digest": "7Y8cXWqFzGzKc1d6W3u4mHnq2e9d2S8bXr1wQ5vT3pLk",
            "sender": WALLET,
            "source": "7k"
        }],
        "pagination": {"last_cursor": 9912, "last_timestamp": 1717214400, "limit": 1}
    })
}

pub fn portfolio_coins() -> Value {
    json!({
        "data": [{
            "coin_type": SUI,
            "symbol": "SUI",
            "decimals": 9,
            "icon_url": null,
            "amount": 250.0,
            "usd_value": 261.875,
            "verified": true,
            "price": 1.0475,
            "pnl_today": 5.9,
            "pnl_percent_today": 2.31,
            "price_change_1d": 2.31,
            "price_change_7d": 5.4,
            "price_change_30d": null
        }]
    })
}
