//! Demo 3: Error Handling
//!
//! Showcases: Error classification, recovery hints, caller-side retry
//!
//! Run: NOODLES_API_KEY=... cargo run --bin error_handling

use colored::*;
use noodles_rest::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const MAX_ATTEMPTS: u32 = 4;

fn describe(err: &NoodlesError) {
    let kind = format!("{:?}", err.kind());
    println!("  {} {}", "Kind:".dimmed(), kind.red().bold());
    println!("  {} {}", "Status:".dimmed(), err.status_code());
    println!("  {} {}", "Message:".dimmed(), err.message());
    if let Some(data) = err.data() {
        println!("  {} {}", "Data:".dimmed(), data);
    }
    println!("  {} {:?}", "Recovery:".dimmed(), err.recovery_strategy());
}

/// Retry a coin detail lookup while the error allows it
async fn detail_with_retry(client: &NoodlesClient, coin_id: &str) -> Result<String, NoodlesError> {
    let params = CoinDetailParams::builder().coin_id(coin_id).build();
    let mut attempt = 0;
    loop {
        match client.coin().get_detail(&params, None).await {
            Ok(response) => return Ok(response.into_payload()?.coin.symbol),
            Err(err) => {
                let delay = err.recovery_strategy().delay_for_attempt(attempt);
                match delay {
                    Some(delay) if attempt + 1 < MAX_ATTEMPTS => {
                        println!(
                            "  {} attempt {} failed ({}), retrying in {:?}",
                            "↻".yellow(),
                            attempt + 1,
                            err.kind(),
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    _ => return Err(err),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ERROR HANDLING".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    // Missing key
    println!("{}", "1. Empty API key".bold());
    if let Err(err) = ApiKey::new("") {
        describe(&err);
    }
    println!();

    // Rejected key
    println!("{}", "2. Rejected API key".bold());
    let bogus = NoodlesClient::new(ApiKey::new("not-a-real-key")?)?;
    let params = CoinPriceParams::builder().coin_id("0x2::sui::SUI").build();
    if let Err(err) = bogus.coin().get_price(&params, None).await {
        describe(&err);
    }
    println!();

    let client = NoodlesClient::from_env()?;

    // Invalid parameter
    println!("{}", "3. Empty coin id".bold());
    let params = CoinDetailParams::builder().coin_id("").build();
    match client.coin().get_detail(&params, None).await {
        Ok(_) => println!("  {}", "unexpected success".yellow()),
        Err(err) => describe(&err),
    }
    println!();

    // Unreachable host
    println!("{}", "4. Unreachable host".bold());
    let offline = NoodlesClient::with_config(
        ApiKey::new("key")?,
        ClientConfig::new()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2)),
    )?;
    if let Err(err) = offline.coin().get_detail(&params, None).await {
        describe(&err);
    }
    println!();

    // Retry driven by the recovery hint
    println!("{}", "5. Caller-side retry".bold());
    match detail_with_retry(&client, "0x2::sui::SUI").await {
        Ok(symbol) => println!("  {} fetched {}", "✓".green(), symbol),
        Err(err) => describe(&err),
    }

    Ok(())
}
