//! HTTP client for YouTube Data API requests

use crate::error::RycError;
use crate::platform::models::ApiErrorEnvelope;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Public endpoint of the YouTube Data API v3
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// API base URL; endpoints are joined onto it
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: Option<String>,
    /// Proxy URL
    pub proxy_url: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: None,
            proxy_url: None,
        }
    }
}

/// Keyed HTTP client. Every request carries the API key as the `key` query parameter.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    api_key: String,
    config: HttpClientConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(api_key: &str) -> Result<Self, RycError> {
        Self::with_config(api_key, HttpClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// Fails with [`RycError::MissingCredential`] on a blank key, before any request is made.
    pub fn with_config(api_key: &str, config: HttpClientConfig) -> Result<Self, RycError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(RycError::MissingCredential);
        }

        let mut builder = ClientBuilder::new().timeout(config.timeout).gzip(true);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        } else {
            builder = builder.user_agent(concat!("ryc/", env!("CARGO_PKG_VERSION")));
        }

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        // Url::join drops the last path segment unless the base ends with a slash
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
            config,
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build the full request URL for an endpoint, including the key
    pub fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, RycError> {
        let mut url = self.base_url.join(endpoint)?;
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                query.append_pair(name, value);
            }
            query.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Issue a GET request and decode the JSON body.
    ///
    /// Non-2xx responses become [`RycError::Api`]. Nothing is retried.
    pub async fn get_json<T>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T, RycError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params)?;
        debug!("GET {} {:?}", endpoint, params);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());
        warn!("{} returned {}: {}", endpoint, status, message);

        Err(RycError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extract the human-readable message from an API error body
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
}
