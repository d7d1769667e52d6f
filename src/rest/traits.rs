//! Trait definition for the CoinCap REST API client.
//!
//! [`CoinCapApi`] abstracts the endpoint operations so that callers can
//! substitute a mock or wrap the client in a decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use coincap_client::rest::{CoinCapApi, CoinCapClient};
//!
//! async fn print_rates<C: CoinCapApi>(client: &C) -> coincap_client::Result<()> {
//!     if let Some(rates) = client.get_rates().await? {
//!         println!("{rates}");
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::CoinCapError;
use crate::rest::CoinCapClient;
use crate::rest::public::{
    AssetHistoryRequest, AssetMarketsRequest, AssetsRequest, CandlesRequest, MarketsRequest,
};

/// Trait defining all CoinCap REST API operations.
///
/// Every method resolves to `Ok(Some(payload))`, `Ok(None)` when failures are
/// silenced, or an error.
pub trait CoinCapApi: Send + Sync {
    /// List assets.
    fn get_assets(
        &self,
        request: Option<&AssetsRequest>,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get a single asset.
    fn get_asset(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get an asset's price history.
    fn get_asset_history(
        &self,
        id: &str,
        request: &AssetHistoryRequest,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get the markets an asset trades on.
    fn get_asset_markets(
        &self,
        id: &str,
        request: Option<&AssetMarketsRequest>,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// List conversion rates.
    fn get_rates(&self) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get a single rate.
    fn get_rate(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// List exchanges.
    fn get_exchanges(&self) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get a single exchange.
    fn get_exchange(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// List markets.
    fn get_markets(
        &self,
        request: Option<&MarketsRequest>,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;

    /// Get candle data.
    fn get_candles(
        &self,
        request: &CandlesRequest,
    ) -> impl Future<Output = Result<Option<Value>, CoinCapError>> + Send;
}

impl CoinCapApi for CoinCapClient {
    async fn get_assets(
        &self,
        request: Option<&AssetsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_assets(self, request).await
    }

    async fn get_asset(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_asset(self, id).await
    }

    async fn get_asset_history(
        &self,
        id: &str,
        request: &AssetHistoryRequest,
    ) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_asset_history(self, id, request).await
    }

    async fn get_asset_markets(
        &self,
        id: &str,
        request: Option<&AssetMarketsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_asset_markets(self, id, request).await
    }

    async fn get_rates(&self) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_rates(self).await
    }

    async fn get_rate(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_rate(self, id).await
    }

    async fn get_exchanges(&self) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_exchanges(self).await
    }

    async fn get_exchange(&self, id: &str) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_exchange(self, id).await
    }

    async fn get_markets(
        &self,
        request: Option<&MarketsRequest>,
    ) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_markets(self, request).await
    }

    async fn get_candles(&self, request: &CandlesRequest) -> Result<Option<Value>, CoinCapError> {
        CoinCapClient::get_candles(self, request).await
    }
}
