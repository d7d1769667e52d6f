//! # CoinCap Client
//!
//! An async Rust client library for the CoinCap v2 REST API.
//!
//! ## Features
//!
//! - One call per CoinCap endpoint (assets, rates, exchanges, markets, candles)
//! - Optional bearer-token authentication
//! - Silent-failure mode that turns API errors into `None`
//! - Pluggable failure logging, backed by `tracing` by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coincap_client::rest::CoinCapClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinCapClient::new();
//!     let bitcoin = client.get_asset("bitcoin").await?;
//!     println!("Bitcoin: {:?}", bitcoin);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinCapError};
pub use rest::{CoinCapApi, CoinCapClient, CoinCapClientBuilder};

/// Result type alias using CoinCapError
pub type Result<T> = std::result::Result<T, CoinCapError>;
