//! Demo 1: Pair Candles
//!
//! Showcases: OHLCV pair endpoint, positional tuple accessors
//!
//! Run: NOODLES_API_KEY=... cargo run --bin ohlcv_pair

use chrono::Utc;
use colored::*;
use noodles_rest::prelude::*;
use tracing_subscriber::EnvFilter;

const SUI: &str = "0x2::sui::SUI";
const USDC: &str = "0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(72).cyan());
    println!("{}", "  SUI / USDC HOURLY CANDLES".cyan().bold());
    println!("{}", "═".repeat(72).cyan());
    println!();

    let client = NoodlesClient::from_env()?;

    let now = Utc::now().timestamp();
    let params = OhlcvPairParams::builder()
        .coin_a(SUI)
        .coin_b(USDC)
        .bucket(Bucket::H1)
        .from(now - 24 * Bucket::H1.as_seconds())
        .to(now)
        .limit(24)
        .build();

    let candles = client.ohlcv().get_pair(&params).await?.into_payload()?;
    println!("{} {} candles received\n", "✓".green(), candles.len());

    println!(
        "  {:<17} {:>10} {:>10} {:>10} {:>10} {:>14}",
        "TIME (UTC)".dimmed(),
        "OPEN".dimmed(),
        "HIGH".dimmed(),
        "LOW".dimmed(),
        "CLOSE".dimmed(),
        "VOLUME SUI".dimmed()
    );

    for candle in &candles.data {
        let time = candle
            .time()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| candle.timestamp().to_string());
        let close = if candle.close() >= candle.open() {
            format!("{:>10.4}", candle.close()).green()
        } else {
            format!("{:>10.4}", candle.close()).red()
        };
        println!(
            "  {:<17} {:>10.4} {:>10.4} {:>10.4} {} {:>14.2}",
            time,
            candle.open(),
            candle.high(),
            candle.low(),
            close,
            candle.volume_a()
        );
    }

    if let (Some(first), Some(last)) = (candles.data.first(), candles.data.last()) {
        let change = (last.close() - first.open()) / first.open() * 100.0;
        let label = format!("{:+.2}%", change);
        println!(
            "\n  {} {}",
            "24h change:".yellow(),
            if change >= 0.0 { label.green() } else { label.red() }
        );
    }

    Ok(())
}
