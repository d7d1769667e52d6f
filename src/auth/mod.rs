//! Authentication module for the CoinCap API.
//!
//! CoinCap authenticates with a single API key passed as a bearer token.
//! Keys are held in secret storage and redacted from debug output.

mod credentials;

pub use credentials::{API_KEY_ENV_VAR, ApiKey, ApiKeyProvider, EnvApiKey, StaticApiKey};
