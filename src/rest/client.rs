//! CoinCap REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{ApiKeyProvider, StaticApiKey};
use crate::error::{ApiError, CoinCapError};
use crate::rest::endpoints::COINCAP_BASE_URL;
use crate::rest::log::{FailureDetail, FailureLogger, RequestFailure, TracingFailureLogger};
use crate::rest::params::encode_params;

/// The CoinCap REST API client.
///
/// Every endpoint method issues exactly one GET request and returns:
/// - `Ok(Some(payload))` on a 200 response,
/// - `Err(CoinCapError::Api(_))` on any other status,
/// - `Ok(None)` instead of the error when the client fails silently.
///
/// # Example
///
/// ```rust,no_run
/// use coincap_client::rest::CoinCapClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinCapClient::new();
///     let rates = client.get_rates().await?;
///     println!("Rates: {:?}", rates);
///     Ok(())
/// }
/// ```
///
/// With an API key and silent failures:
///
/// ```rust,no_run
/// use coincap_client::rest::CoinCapClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinCapClient::builder()
///         .api_key("my-key")
///         .fail_silently(true)
///         .build();
///
///     match client.get_asset("not-a-coin").await? {
///         Some(asset) => println!("Asset: {asset}"),
///         None => println!("Asset lookup failed"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinCapClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: Option<Arc<dyn ApiKeyProvider>>,
    fail_silently: bool,
    logger: Arc<dyn FailureLogger>,
}

impl CoinCapClient {
    /// Create a new unauthenticated client that raises API errors.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client authenticating with the given API key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::new()
    }

    /// Base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether API errors are turned into `None`.
    pub fn fail_silently(&self) -> bool {
        self.fail_silently
    }

    /// Switch silent-failure mode on or off.
    pub fn set_fail_silently(&mut self, fail_silently: bool) {
        self.fail_silently = fail_silently;
    }

    /// Headers attached to every request.
    ///
    /// Contains only `Authorization: Bearer <key>` when a non-empty key is
    /// configured, and nothing otherwise.
    pub fn auth_headers(&self) -> Result<HeaderMap, CoinCapError> {
        let mut headers = HeaderMap::new();
        let key = self.api_key.as_ref().map(|provider| provider.get_api_key());
        if let Some(key) = key.filter(|key| !key.expose_secret().is_empty()) {
            let mut value = HeaderValue::from_str(&key.bearer()).map_err(|_| {
                CoinCapError::InvalidRequest("API key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Make a GET request without query parameters.
    pub async fn get(&self, path: &str) -> Result<Option<Value>, CoinCapError> {
        self.execute(path, Vec::new()).await
    }

    /// Make a GET request with query parameters.
    ///
    /// `params` must serialize to a map. Absent values are removed before the
    /// query string is built.
    pub async fn get_with_params<Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<Option<Value>, CoinCapError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query = encode_params(params)?;
        self.execute(path, query).await
    }

    async fn execute(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Option<Value>, CoinCapError> {
        let query_string = serde_urlencoded::to_string(&query)
            .map_err(|e| CoinCapError::InvalidRequest(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query_string)
        };

        let response = self
            .http_client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        self.parse_response(path, response).await
    }

    /// Turn a response into a payload, `None`, or an API error.
    async fn parse_response(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Option<Value>, CoinCapError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::OK {
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }

        let body = String::from_utf8_lossy(&bytes).into_owned();
        let detail = FailureDetail::from_body(&body);
        let failure = RequestFailure {
            path,
            status,
            detail: &detail,
        };

        if self.fail_silently {
            self.logger.error_silenced(&failure);
            Ok(None)
        } else {
            self.logger.error_raised(&failure);
            Err(CoinCapError::Api(ApiError::new(status, body)))
        }
    }
}

impl Default for CoinCapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinCapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinCapClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("fail_silently", &self.fail_silently)
            .finish()
    }
}

/// Builder for [`CoinCapClient`].
pub struct CoinCapClientBuilder {
    base_url: String,
    api_key: Option<Arc<dyn ApiKeyProvider>>,
    fail_silently: bool,
    logger: Option<Arc<dyn FailureLogger>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl CoinCapClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINCAP_BASE_URL.to_string(),
            api_key: None,
            fail_silently: false,
            logger: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// A trailing `/` is added if missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Authenticate with a fixed API key.
    ///
    /// An empty key leaves the client unauthenticated.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.is_empty() {
            None
        } else {
            Some(Arc::new(StaticApiKey::new(api_key)))
        };
        self
    }

    /// Set the API key provider for authenticated requests.
    pub fn api_key_provider(mut self, provider: Arc<dyn ApiKeyProvider>) -> Self {
        self.api_key = Some(provider);
        self
    }

    /// Return `None` instead of an error for non-200 responses.
    pub fn fail_silently(mut self, fail_silently: bool) -> Self {
        self.fail_silently = fail_silently;
        self
    }

    /// Set the logger receiving failed-request events.
    pub fn logger(mut self, logger: Arc<dyn FailureLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinCapClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coincap-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coincap-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        CoinCapClient {
            http_client: client,
            base_url,
            api_key: self.api_key,
            fail_silently: self.fail_silently,
            logger: self
                .logger
                .unwrap_or_else(|| Arc::new(TracingFailureLogger)),
        }
    }
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
