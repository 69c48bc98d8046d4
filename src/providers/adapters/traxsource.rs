//! Traxsource provider

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError};
use crate::providers::head_meta;
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

/// `/title/<id>`, usually followed by a slug
static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/title/(\d+)(?:/[^/]*)?/?$").expect("valid regex"));

pub struct TraxsourceProvider {
    http: HttpClient,
}

impl TraxsourceProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for TraxsourceProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["traxsource.com"]
    }

    fn name(&self) -> &'static str {
        "Traxsource"
    }

    fn favicon(&self) -> &'static str {
        "https://geo-static.traxsource.com/img/favicon-128x128.png"
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
