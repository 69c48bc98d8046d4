//! Spotify provider
//!
//! The album page's `og:image` is the only artwork we can reach without
//! going through OAuth for the Web API.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError};
use crate::providers::head_meta;
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:intl-[a-z]{2}/)?album/(\w+)/?$").expect("valid regex"));

pub struct SpotifyProvider {
    http: HttpClient,
}

impl SpotifyProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for SpotifyProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["open.spotify.com"]
    }

    fn name(&self) -> &'static str {
        "Spotify"
    }

    fn favicon(&self) -> &'static str {
        "https://open.spotifycdn.com/cdn/images/favicon32.b64ecc03.png"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::domain::ArtworkType;
    use crate::test_utils::{MockFetcher, assert_url_matching, mock_http, og_image_page, url};

    #[test]
    fn test_url_matching() {
        let provider = SpotifyProvider::new(mock_http(MockFetcher::new()));
        assert_url_matching(
            &provider,
            &[
                ("https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc", "3KShZFMj5Yba4vWxYDZ8sc"),
                ("https://open.spotify.com/intl-de/album/1ZxPxVRwn2ad2PH7iLrkyN", "1ZxPxVRwn2ad2PH7iLrkyN"),
            ],
            &[
                "https://open.spotify.com/artist/0k17h0D3J5VfsdmQ1iZtE9",
                "https://open.spotify.com/track/1ZxPxVRwn2ad2PH7iLrkyN",
            ],
        );
    }

    #[tokio::test]
    async fn test_finds_cover() {
        let provider = SpotifyProvider::new(mock_http(MockFetcher::new().with_page(
            "https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc",
            200,
            &og_image_page("https://i.scdn.co/image/ab67616d0000b273d8601e15fa1b4351fe1fc6ae"),
        )));

        let covers = provider
            .find_images(&url("https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc"))
            .await
            .unwrap();

        assert_eq!(covers.len(), 1);
        assert_eq!(covers[0].url.as_str(), "https://i.scdn.co/image/ab67616d0000b273d8601e15fa1b4351fe1fc6ae");
        assert_eq!(covers[0].types, vec![ArtworkType::Front]);
    }

    #[tokio::test]
    async fn test_redirect_to_other_release_is_refused() {
        let provider = SpotifyProvider::new(mock_http(MockFetcher::new().with_redirect(
            "https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc",
            "https://open.spotify.com/album/9KShZFMj5Yba4vWxYDZ8sc",
            200,
            &og_image_page("https://i.scdn.co/image/ab67616d0000b273d8601e15fa1b4351fe1fc6ae"),
        )));

        let result = provider.find_images(&url("https://open.spotify.com/album/3KShZFMj5Yba4vWxYDZ8sc")).await;
        assert!(matches!(result, Err(ProviderError::UnsafeRedirect { .. })));
    }
}
