//! CoinCap REST API endpoint paths.
//!
//! Paths are relative to [`COINCAP_BASE_URL`] and carry no leading slash.

/// Base URL for the CoinCap v2 REST API.
pub const COINCAP_BASE_URL: &str = "https://api.coincap.io/v2/";

/// List assets.
pub const ASSETS: &str = "assets";
/// List conversion rates.
pub const RATES: &str = "rates";
/// List exchanges.
pub const EXCHANGES: &str = "exchanges";
/// List markets.
pub const MARKETS: &str = "markets";
/// Get candles.
pub const CANDLES: &str = "candles";

/// Path of a single asset.
pub fn asset(id: &str) -> String {
    format!("{ASSETS}/{id}")
}

/// Path of an asset's price history.
pub fn asset_history(id: &str) -> String {
    format!("{ASSETS}/{id}/history")
}

/// Path of the markets trading an asset.
pub fn asset_markets(id: &str) -> String {
    format!("{ASSETS}/{id}/markets")
}

/// Path of a single rate.
pub fn rate(id: &str) -> String {
    format!("{RATES}/{id}")
}

/// Path of a single exchange.
pub fn exchange(id: &str) -> String {
    format!("{EXCHANGES}/{id}")
}
