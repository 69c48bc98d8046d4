//! Cover art providers - find importable artwork on external music sites.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - `CoverArt`, `ArtworkType`, errors
//! - **Contract** (`traits.rs`) - the `CoverArtProvider` trait, including the
//!   shared redirect-safe page fetch
//! - **HTTP** (`http.rs`) - the `Fetcher` seam between providers and reqwest
//! - **Shared discovery** (`head_meta.rs`) - `og:image` extraction for
//!   providers that need nothing more
//! - **Adapters** (`adapters/`) - one provider per site, with DTOs where the
//!   site has an API
//! - **Registry** (`registry.rs`) - hostname to provider dispatch
//!
//! # Usage
//!
//! ```ignore
//! let http = HttpClient::new(&config.http)?;
//! let registry = ProviderRegistry::with_default_providers(&http, &config)?;
//!
//! let discovery = discover(&registry, "https://open.qobuz.com/album/0825646089178").await?;
//! for cover in discovery.images {
//!     println!("{} {:?}", cover.url, cover.types);
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod head_meta;
pub mod http;
pub mod registry;
pub mod traits;

use serde::Serialize;
use url::Url;

pub use domain::{ArtworkType, CoverArt, ProviderError};
pub use http::HttpClient;
pub use registry::{ProviderRegistry, RegistryError};
pub use traits::CoverArtProvider;

use crate::config::Config;
use crate::error::{Error, Result, ResultExt};

impl ProviderRegistry {
    /// Registry with every built-in provider.
    pub fn with_default_providers(
        http: &HttpClient,
        config: &Config,
    ) -> std::result::Result<Self, RegistryError> {
        Self::new(adapters::default_providers(http, config))
    }
}

/// Outcome of one discovery call
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    /// Name of the provider that handled the URL
    pub provider: &'static str,
    pub url: Url,
    pub images: Vec<CoverArt>,
}

/// Parse `raw_url`, pick its provider and find its images.
pub async fn discover(registry: &ProviderRegistry, raw_url: &str) -> Result<Discovery> {
    let url = Url::parse(raw_url.trim()).map_err(|e| Error::invalid_url(raw_url, e))?;

    let provider = registry
        .get_provider(&url)
        .ok_or_else(|| Error::UnsupportedUrl(url.to_string()))?;

    tracing::info!(provider = provider.name(), %url, "finding images");

    let images = provider
        .find_images(&url)
        .await
        .map_err(Error::from)
        .with_context(format!("{} provider failed for {}", provider.name(), url))?;

    tracing::info!(provider = provider.name(), count = images.len(), "found images");

    Ok(Discovery {
        provider: provider.name(),
        url,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockFetcher, mock_http, og_image_page, url};

    fn default_registry(fetcher: MockFetcher) -> ProviderRegistry {
        ProviderRegistry::with_default_providers(&mock_http(fetcher), &Config::default()).unwrap()
    }

    #[test]
    fn default_providers_have_unique_domains() {
        let registry = default_registry(MockFetcher::new());
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn default_registry_dispatch() {
        let registry = default_registry(MockFetcher::new());

        let cases = [
            ("https://open.qobuz.com/album/0074643811224", "Qobuz"),
            ("https://www.qobuz.com/gb-en/album/x/0060075354770", "Qobuz"),
            ("https://iosys.booth.pm/items/4182601", "BOOTH"),
            ("https://booth.pm/ja/items/1973472", "BOOTH"),
            ("https://www.deezer.com/en/album/302127", "Deezer"),
            ("https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc", "Spotify"),
            (
                "https://musicbrainz.org/release/3b9d6a3c-2f58-4a4f-9a56-5e2c4f7f1a10",
                "MusicBrainz",
            ),
        ];
        for (raw, expected) in cases {
            let provider = registry.get_provider(&url(raw));
            assert_eq!(provider.map(|p| p.name()), Some(expected), "{raw}");
        }
    }

    #[test]
    fn default_registry_rejects_unknown_and_unsupported() {
        let registry = default_registry(MockFetcher::new());
        assert!(registry.get_provider(&url("https://example.com/album/1")).is_none());
        assert!(registry.get_provider(&url("https://booth.pm/en/browse/Vocaloid")).is_none());
        assert!(registry
            .get_provider_by_domain(&url("https://booth.pm/en/browse/Vocaloid"))
            .is_some());
    }

    #[tokio::test]
    async fn discover_returns_images() {
        let registry = default_registry(MockFetcher::new().with_page(
            "https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc",
            200,
            &og_image_page("https://i.scdn.co/image/abc"),
        ));

        let discovery = discover(&registry, "https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc")
            .await
            .unwrap();

        assert_eq!(discovery.provider, "Spotify");
        assert_eq!(discovery.images.len(), 1);
        assert_eq!(discovery.images[0].types, vec![ArtworkType::Front]);
    }

    #[tokio::test]
    async fn discover_invalid_url() {
        let registry = default_registry(MockFetcher::new());
        let err = discover(&registry, "not a url").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn discover_unsupported_url() {
        let registry = default_registry(MockFetcher::new());
        let err = discover(&registry, "https://open.qobuz.com/artist/50195")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedUrl(_)));
    }

    #[tokio::test]
    async fn discover_failure_names_provider_and_url() {
        let registry = default_registry(MockFetcher::new());
        let err = discover(&registry, "https://booth.pm/ja/items/404")
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("BOOTH"));
        assert!(msg.contains("https://booth.pm/ja/items/404"));
    }
}
