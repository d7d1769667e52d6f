use std::sync::Arc;

use coincap_client::auth::EnvApiKey;
use coincap_client::rest::CoinCapClient;

fn live_tests_enabled() -> bool {
    std::env::var("COINCAP_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let mut builder = CoinCapClient::builder();
    if let Some(key) = EnvApiKey::try_from_env() {
        builder = builder.api_key_provider(Arc::new(key));
    }
    let client = builder.build();

    let asset = client.get_asset("bitcoin").await?;
    assert!(asset.is_some());
    let rates = client.get_rates().await?;
    assert!(rates.is_some());

    Ok(())
}
