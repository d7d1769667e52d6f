//! CoinCap REST API client.
//!
//! All requests go through one path: the relative endpoint path is appended
//! to the base URL, absent parameters are dropped, the API key (if any) is
//! attached as a bearer token, and the response is turned into a JSON
//! payload, `None` (silent mode), or an [`ApiError`](crate::error::ApiError).
//!
//! # Trait-based API
//!
//! The [`CoinCapApi`] trait abstracts all endpoint operations, enabling
//! mock implementations for testing and decorators around the client.

mod client;
pub mod endpoints;
pub mod log;
pub mod params;
pub mod public;
mod traits;

pub use client::{CoinCapClient, CoinCapClientBuilder};
pub use log::{FailureDetail, FailureLogger, RequestFailure, TracingFailureLogger};
pub use traits::CoinCapApi;
