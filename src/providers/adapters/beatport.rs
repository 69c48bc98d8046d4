//! Beatport provider
//!
//! Release pages carry a 1400px `og:image`.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError};
use crate::providers::head_meta;
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/release/[^/]+/(\d+)/?$").expect("valid regex"));

pub struct BeatportProvider {
    http: HttpClient,
}

impl BeatportProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for BeatportProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["beatport.com"]
    }

    fn name(&self) -> &'static str {
        "Beatport"
    }

    fn favicon(&self) -> &'static str {
        "https://geo-pro.beatport.com/static/ea225b5168059ba412818496089481eb.png"
    }

    fn supports_url(&self, url: &Url) -> bool {
        RELEASE.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&RELEASE, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        head_meta::find_images(self, url).await
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}
