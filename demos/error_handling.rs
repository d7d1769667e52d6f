//! Example: Working with CoinCapError and silent failures.
//!
//! Run with: cargo run --example error_handling

use coincap_client::CoinCapError;
use coincap_client::rest::CoinCapClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut client = CoinCapClient::new();

    match client.get_asset("definitely-not-an-asset").await {
        Ok(asset) => println!("Unexpected asset: {asset:?}"),
        Err(CoinCapError::Api(api_error)) => {
            println!("API error: {api_error}");
            println!("Status: {}", api_error.status_code());
            println!("Not found: {}", api_error.is_not_found());
        }
        Err(other) => return Err(other.into()),
    }

    client.set_fail_silently(true);
    let asset = client.get_asset("definitely-not-an-asset").await?;
    println!("Silent result: {asset:?}");

    Ok(())
}
