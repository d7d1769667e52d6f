//! Example: Fetching market data from CoinCap.
//!
//! Reads an optional API key from `COINCAP_API_KEY` (a `.env` file works too).
//!
//! Run with: cargo run --example public_data

use std::sync::Arc;

use coincap_client::auth::EnvApiKey;
use coincap_client::rest::CoinCapClient;
use coincap_client::rest::public::{
    AssetHistoryRequest, AssetsRequest, CandlesRequest, Interval, MarketsRequest,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = CoinCapClient::builder();
    if let Some(key) = EnvApiKey::try_from_env() {
        builder = builder.api_key_provider(Arc::new(key));
    }
    let client = builder.build();

    // Top assets
    println!("=== Assets ===");
    let request = AssetsRequest::new().limit(5);
    if let Some(assets) = client.get_assets(Some(&request)).await? {
        for asset in assets["data"].as_array().into_iter().flatten() {
            println!("{}: {} USD", asset["symbol"], asset["priceUsd"]);
        }
    }

    // Daily history
    println!("\n=== Bitcoin history (d1) ===");
    let history = AssetHistoryRequest::new(Interval::Day1);
    if let Some(points) = client.get_asset_history("bitcoin", &history).await? {
        let count = points["data"].as_array().map_or(0, Vec::len);
        println!("{count} data points");
    }

    // Markets for BTC on Binance
    println!("\n=== Markets ===");
    let markets = MarketsRequest::new()
        .exchange_id("binance")
        .base_symbol("BTC")
        .limit(3);
    if let Some(markets) = client.get_markets(Some(&markets)).await? {
        for market in markets["data"].as_array().into_iter().flatten() {
            println!(
                "{}/{}: {}",
                market["baseSymbol"], market["quoteSymbol"], market["priceQuote"]
            );
        }
    }

    // Candles
    println!("\n=== Candles ===");
    let candles = CandlesRequest::new("poloniex", Interval::Hour8, "ethereum", "bitcoin");
    if let Some(candles) = client.get_candles(&candles).await? {
        println!("{}", candles["data"].as_array().map_or(0, Vec::len));
    }

    Ok(())
}
