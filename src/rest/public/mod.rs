//! CoinCap endpoint methods.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CoinCapError;
use crate::rest::CoinCapClient;
use crate::rest::endpoints;

impl CoinCapClient {
    /// List assets, optionally filtered.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coincap_client::rest::CoinCapClient;
    /// use coincap_client::rest::public::AssetsRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinCapClient::new();
    ///     let request = AssetsRequest::new().ids(["bitcoin", "ethereum"]);
    ///     let assets = client.get_assets(Some(&request)).await?;
    ///     println!("{:?}", assets);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_assets(
        &self,
        request: Option<&AssetsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        match request {
            Some(req) => self.get_with_params(endpoints::ASSETS, req).await,
            None => self.get(endpoints::ASSETS).await,
        }
    }

    /// Get a single asset by id.
    pub async fn get_asset(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        self.get(&endpoints::asset(id)).await
    }

    /// Get the price history of an asset.
    pub async fn get_asset_history(
        &self,
        id: &str,
        request: &AssetHistoryRequest,
    ) -> Result<Option<Value>, CoinCapError> {
        self.get_with_params(&endpoints::asset_history(id), request)
            .await
    }

    /// Get the markets an asset trades on.
    pub async fn get_asset_markets(
        &self,
        id: &str,
        request: Option<&AssetMarketsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        let path = endpoints::asset_markets(id);
        match request {
            Some(req) => self.get_with_params(&path, req).await,
            None => self.get(&path).await,
        }
    }

    /// List conversion rates.
    pub async fn get_rates(&self) -> Result<Option<Value>, CoinCapError> {
        self.get(endpoints::RATES).await
    }

    /// Get a single rate by id.
    pub async fn get_rate(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        self.get(&endpoints::rate(id)).await
    }

    /// List exchanges.
    pub async fn get_exchanges(&self) -> Result<Option<Value>, CoinCapError> {
        self.get(endpoints::EXCHANGES).await
    }

    /// Get a single exchange by id.
    pub async fn get_exchange(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        self.get(&endpoints::exchange(id)).await
    }

    /// List markets, optionally filtered.
    pub async fn get_markets(
        &self,
        request: Option<&MarketsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        match request {
            Some(req) => self.get_with_params(endpoints::MARKETS, req).await,
            None => self.get(endpoints::MARKETS).await,
        }
    }

    /// Get candle data for a pair on an exchange.
    pub async fn get_candles(
        &self,
        request: &CandlesRequest,
    ) -> Result<Option<Value>, CoinCapError> {
        self.get_with_params(endpoints::CANDLES, request).await
    }
}
