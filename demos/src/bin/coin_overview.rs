//! Demo 2: Coin Overview
//!
//! Showcases: Coin facade, chain-scoped endpoints, decimal accessors
//!
//! Run: NOODLES_API_KEY=... cargo run --bin coin_overview [coin_type]

use colored::*;
use noodles_rest::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_COIN: &str = "0x2::sui::SUI";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let coin_type = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_COIN.to_string());
    let client = NoodlesClient::from_env()?;
    let chain = Chain::sui();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COIN OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let detail = client
        .coin()
        .get_detail(&CoinDetailParams::builder().coin_id(coin_type.as_str()).build(), Some(&chain))
        .await?
        .into_payload()?;

    println!("  {} ({})", detail.coin.name.bold(), detail.coin.symbol.yellow());
    if detail.coin.verified {
        println!("  {}", "✓ verified".green());
    }
    if let Some(price) = detail.price_change.price_decimal() {
        println!("  {} ${}", "Price:".dimmed(), price);
    }
    if let Some(change) = detail.price_change.price_change_1d {
        let label = format!("{:+.2}%", change);
        println!(
            "  {} {}",
            "24h:".dimmed(),
            if change >= 0.0 { label.green() } else { label.red() }
        );
    }
    if let Some(market_cap) = detail.coin.market_cap_decimal() {
        println!("  {} ${}", "Market cap:".dimmed(), market_cap.round_dp(0));
    }
    if let Some(tags) = &detail.tags {
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        println!("  {} {}", "Tags:".dimmed(), names.join(", "));
    }
    println!();

    let activity = client
        .coin()
        .get_buy_sell(
            &CoinBuySellParams::builder()
                .coin_id(coin_type.as_str())
                .duration(BuySellDuration::D1)
                .build(),
        )
        .await?
        .into_payload()?;

    println!("{}", "  Activity (1d)".bold());
    println!(
        "  {} {} tx  ${:.0}",
        "Buys: ".green(),
        activity.buy.tx,
        activity.buy.vol
    );
    println!(
        "  {} {} tx  ${:.0}",
        "Sells:".red(),
        activity.sell.tx,
        activity.sell.vol
    );
    println!("  {} ${:+.0}", "Net:  ".dimmed(), activity.net_volume());
    println!();

    let liquidity = client
        .coin()
        .get_liquidity(&CoinLiquidityParams::builder().coin_type(coin_type.as_str()).build())
        .await?
        .into_payload()?;

    println!("{}", "  Liquidity".bold());
    let mut pools = liquidity.dex_liquidity.clone();
    pools.sort_by(|a, b| b.tvl_usd.total_cmp(&a.tvl_usd));
    for pool in pools.iter().take(5) {
        println!(
            "  {:<12} {}/{:<8} ${:>14.0}",
            pool.protocol,
            pool.coin_a.symbol,
            pool.coin_b.symbol,
            pool.tvl_usd
        );
    }
    println!(
        "  {} ${:.0} across {} DEX pools, {} lending markets",
        "Total:".yellow(),
        liquidity.dex_tvl_usd(),
        liquidity.dex_liquidity.len(),
        liquidity.lending_liquidity.len()
    );

    Ok(())
}
