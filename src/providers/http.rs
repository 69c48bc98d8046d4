//! HTTP access for providers.
//!
//! Providers never talk to reqwest directly. They go through [`HttpClient`],
//! which wraps a [`Fetcher`] implementation. Production code uses
//! [`ReqwestFetcher`]; tests substitute a fetcher returning canned responses.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::domain::ProviderError;
use crate::config::HttpConfig;

/// Default User-Agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An outgoing GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A completed response, after redirects were followed
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// URL the response was served from
    pub final_url: Url,
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Turn non-2xx statuses into errors.
    pub fn error_for_status(self) -> Result<Self, ProviderError> {
        match self.status {
            s if (200..300).contains(&s) => Ok(self),
            404 => Err(ProviderError::NotFound(self.final_url.to_string())),
            429 => Err(ProviderError::RateLimited),
            status => Err(ProviderError::Http {
                status,
                url: self.final_url.to_string(),
            }),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ProviderError> {
        serde_json::from_str(&self.body).map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

/// Performs HTTP requests.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Send the request, following redirects.
    ///
    /// Only transport failures are errors; any HTTP status is a response.
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, ProviderError>;
}

/// reqwest-backed fetcher
pub struct ReqwestFetcher {
    http_client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a new fetcher
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Send a User-Agent header identifying the application
    /// - Apply the configured request timeout, if any
    pub fn new(config: &HttpConfig) -> Result<Self, ProviderError> {
        let user_agent = config.user_agent.as_deref().unwrap_or(USER_AGENT);
        let mut builder = reqwest::Client::builder().gzip(true).user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, ProviderError> {
        let mut builder = self.http_client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let final_url = response.url().clone();
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        tracing::debug!(url = %request.url, %final_url, status, "fetched");

        Ok(FetchResponse {
            final_url,
            status,
            body,
        })
    }
}

/// Cheaply cloneable handle shared by all providers
#[derive(Clone)]
pub struct HttpClient {
    fetcher: Arc<dyn Fetcher>,
}

impl HttpClient {
    /// Create a client backed by reqwest
    pub fn new(config: &HttpConfig) -> Result<Self, ProviderError> {
        Ok(Self::with_fetcher(Arc::new(ReqwestFetcher::new(config)?)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Send a request without interpreting the status
    pub async fn send(&self, request: FetchRequest) -> Result<FetchResponse, ProviderError> {
        self.fetcher.fetch(&request).await
    }

    /// GET a URL without interpreting the status
    pub async fn get(&self, url: &Url) -> Result<FetchResponse, ProviderError> {
        self.send(FetchRequest::get(url.clone())).await
    }

    /// GET a URL and deserialize a successful JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ProviderError> {
        self.get(url).await?.error_for_status()?.json()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}
