//! API key management for CoinCap authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the CoinCap API key.
pub const API_KEY_ENV_VAR: &str = "COINCAP_API_KEY";

/// A CoinCap API key, sent as a bearer token.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create a new API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Get the raw key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }

    /// The `Authorization` header value for this key.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.expose_secret())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish()
    }
}

/// Trait for providing the API key.
///
/// Implement this trait to customize how the key is retrieved,
/// for example from a secrets manager.
pub trait ApiKeyProvider: Send + Sync {
    /// Get the API key.
    fn get_api_key(&self) -> &ApiKey;
}

/// Static provider that holds the key directly.
#[derive(Clone)]
pub struct StaticApiKey {
    key: ApiKey,
}

impl StaticApiKey {
    /// Create a new static key provider.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: ApiKey::new(key),
        }
    }
}

impl ApiKeyProvider for StaticApiKey {
    fn get_api_key(&self) -> &ApiKey {
        &self.key
    }
}

/// Key provider that reads from an environment variable.
///
/// By default, reads from `COINCAP_API_KEY`.
pub struct EnvApiKey {
    key: ApiKey,
}

impl EnvApiKey {
    /// Try to read the key from `COINCAP_API_KEY`.
    ///
    /// Returns `None` if the variable is unset or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to read the key from a custom environment variable.
    ///
    /// Returns `None` if the variable is unset or empty.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        let key = std::env::var(var).ok().filter(|k| !k.is_empty())?;
        Some(Self {
            key: ApiKey::new(key),
        })
    }
}

impl ApiKeyProvider for EnvApiKey {
    fn get_api_key(&self) -> &ApiKey {
        &self.key
    }
}
