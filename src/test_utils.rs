//! Test utilities and fixtures for cover-scout tests.
//!
//! Providers are exercised against [`MockFetcher`], which serves canned
//! responses keyed by URL instead of touching the network.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{MockFetcher, mock_http};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let http = mock_http(MockFetcher::new().with_json(url, json));
//!     let provider = QobuzProvider::new(http);
//!     // ... test logic
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError};
use crate::providers::http::{FetchRequest, FetchResponse, Fetcher, HttpClient};
use crate::providers::traits::{CoverArtProvider, capture_id};

/// Fetcher returning predefined responses.
///
/// Unknown URLs get a 404 response. Every request is recorded so tests can
/// assert on headers.
#[derive(Default)]
pub struct MockFetcher {
    routes: HashMap<String, FetchResponse>,
    failures: HashMap<String, ProviderError>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `status` for `url`.
    pub fn with_page(self, url: &str, status: u16, body: &str) -> Self {
        self.with_redirect(url, url, status, body)
    }

    /// Serve a 200 JSON body for `url`.
    pub fn with_json(self, url: &str, body: &str) -> Self {
        self.with_page(url, 200, body)
    }

    /// Serve `body` for `url` as if the request was redirected to `final_url`.
    pub fn with_redirect(mut self, url: &str, final_url: &str, status: u16, body: &str) -> Self {
        let final_url = Url::parse(final_url).expect("valid final URL in test fixture");
        self.routes.insert(
            normalize(url),
            FetchResponse {
                final_url,
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fail requests to `url` with a transport error.
    pub fn with_failure(mut self, url: &str, error: ProviderError) -> Self {
        self.failures.insert(normalize(url), error);
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

fn normalize(url: &str) -> String {
    Url::parse(url)
        .expect("valid URL in test fixture")
        .to_string()
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, ProviderError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let key = request.url.to_string();
        if let Some(err) = self.failures.get(&key) {
            return Err(err.clone());
        }
        Ok(self.routes.get(&key).cloned().unwrap_or(FetchResponse {
            final_url: request.url.clone(),
            status: 404,
            body: "Not Found".to_string(),
        }))
    }
}

/// Wrap a mock fetcher in an [`HttpClient`].
pub fn mock_http(fetcher: MockFetcher) -> HttpClient {
    HttpClient::with_fetcher(Arc::new(fetcher))
}

/// Wrap a mock fetcher and keep a handle to inspect recorded requests.
pub fn mock_http_shared(fetcher: MockFetcher) -> (HttpClient, Arc<MockFetcher>) {
    let fetcher = Arc::new(fetcher);
    (HttpClient::with_fetcher(fetcher.clone()), fetcher)
}

static STUB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/release/(\d+)$").expect("valid regex"));

/// A minimal provider for `stub.example` release pages.
pub struct StubProvider {
    http: HttpClient,
    domains: &'static [&'static str],
    name: &'static str,
}

impl StubProvider {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            domains: &["stub.example"],
            name: "Stub",
        }
    }

    /// Stub claiming the given domains, for registry tests.
    pub fn claiming(name: &'static str, domains: &'static [&'static str]) -> Self {
        Self {
            http: mock_http(MockFetcher::new()),
            domains,
            name,
        }
    }
}

#[async_trait]
impl CoverArtProvider for StubProvider {
    fn supported_domains(&self) -> &[&'static str] {
        self.domains
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn favicon(&self) -> &'static str {
        "https://stub.example/favicon.ico"
    }

    fn supports_url(&self, url: &Url) -> bool {
        STUB_ID.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&STUB_ID, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        crate::providers::head_meta::find_images(self, url).await
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Parse a URL in a test.
pub fn url(s: &str) -> Url {
    Url::parse(s).expect("valid URL in test")
}

/// Assert the URL-matching behaviour of a provider.
///
/// Every `(url, id)` in `supported` must be supported and yield `id`; every
/// URL in `unsupported` must be rejected.
pub fn assert_url_matching(
    provider: &dyn CoverArtProvider,
    supported: &[(&str, &str)],
    unsupported: &[&str],
) {
    for (raw, id) in supported {
        let u = url(raw);
        assert!(provider.supports_url(&u), "{} should support {raw}", provider.name());
        assert_eq!(
            provider.extract_id(&u).as_deref(),
            Some(*id),
            "{} extracted wrong ID from {raw}",
            provider.name()
        );
    }
    for raw in unsupported {
        assert!(
            !provider.supports_url(&url(raw)),
            "{} should not support {raw}",
            provider.name()
        );
    }
}

/// Minimal HTML page with an `og:image` meta property.
pub fn og_image_page(image: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta property="og:title" content="Release"><meta property="og:image" content="{image}"></head><body></body></html>"#
    )
}
