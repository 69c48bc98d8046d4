//! BOOTH provider
//!
//! Items live on `booth.pm` as well as on shop subdomains such as
//! `iosys.booth.pm`. Every item page has a JSON twin at `<item>.json`
//! listing the item's images in display order.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError, parse_url};
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

/// `/items/<id>` with an optional locale prefix (`ja`, `en`, `zh-cn`, `zh-tw`, ...)
static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:[a-z]{2}(?:-[a-z]{2})?/)?items/(\d+)/?$").expect("valid regex")
});

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    images: Vec<ItemImage>,
}

#[derive(Debug, Deserialize)]
struct ItemImage {
    original: Option<String>,
}

pub struct BoothProvider {
    http: HttpClient,
}

impl BoothProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for BoothProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["booth.pm", "*.booth.pm"]
    }

    fn name(&self) -> &'static str {
        "BOOTH"
    }

    fn favicon(&self) -> &'static str {
        "https://booth.pm/static-images/pwa/icon_size_128.png"
    }

    fn supports_url(&self, url: &Url) -> bool {
        ITEM.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&ITEM, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        let id = self
            .extract_id(url)
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;
        let api_url = parse_url(&format!("https://booth.pm/en/items/{id}.json"))?;

        let item: Item = self.http.get_json(&api_url).await?;

        // First image is the item's thumbnail, i.e. the cover.
        let covers = item
            .images
            .iter()
            .filter_map(|image| image.original.as_deref())
            .filter_map(|raw| Url::parse(raw).ok())
            .enumerate()
            .map(|(i, url)| {
                if i == 0 {
                    CoverArt::front(url)
                } else {
                    CoverArt::new(url)
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(item = %id, count = covers.len(), "BOOTH images");
        Ok(covers)
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}
