//! Qobuz provider
//!
//! Prefers the web player's JSON API, which also lists goodies such as
//! digital booklets. When the API doesn't know the album (or is otherwise
//! unavailable) the cover URL is derived from the album ID instead, since
//! static cover URLs follow a fixed layout.
//!
//! An invalid app ID is NOT papered over by the fallback: it means our
//! integration is broken, not that the release has no art.

pub mod dto;
mod adapter;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError, parse_url};
use crate::providers::http::{FetchRequest, HttpClient};
use crate::providers::traits::{CoverArtProvider, capture_id};

pub use adapter::{BOOKLET_COMMENT, extract_goodies, id_to_cover_url};

/// App ID of the Qobuz web player
pub const DEFAULT_APP_ID: &str = "712109809";

const API_BASE: &str = "https://www.qobuz.com/api.json/0.2";

/// `www.qobuz.com/gb-en/album/<slug>/<id>`, language prefix optional
static WWW_ALBUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:[a-z]{2}-[a-z]{2}/)?album/[^/]+/(\w+)/?$").expect("valid regex")
});

/// `open.qobuz.com/album/<id>`, possibly followed by more path segments
static OPEN_ALBUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/album/(\w+)(?:/.*)?$").expect("valid regex"));

pub struct QobuzProvider {
    http: HttpClient,
    app_id: String,
}

impl QobuzProvider {
    pub fn new(http: HttpClient) -> Self {
        Self::with_app_id(http, DEFAULT_APP_ID)
    }

    pub fn with_app_id(http: HttpClient, app_id: impl Into<String>) -> Self {
        Self {
            http,
            app_id: app_id.into(),
        }
    }

    fn album_regex(url: &Url) -> &'static Regex {
        if url.host_str() == Some("open.qobuz.com") {
            &*OPEN_ALBUM
        } else {
            &*WWW_ALBUM
        }
    }

    /// Query the API for album metadata
    async fn fetch_album(&self, id: &str) -> Result<dto::AlbumMetadata, ProviderError> {
        let url = parse_url(&format!(
            "{API_BASE}/album/get?album_id={}&offset=0&limit=20",
            urlencoding::encode(id)
        ))?;

        let response = self
            .http
            .send(FetchRequest::get(url).header("X-App-Id", self.app_id.as_str()))
            .await?;

        if matches!(response.status, 400 | 401) {
            // Try to parse error response
            let detail = response
                .json::<dto::ApiError>()
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("HTTP {}", response.status));
            return Err(ProviderError::InvalidCredentials {
                provider: self.name().to_string(),
                message: format!("Bad response from Qobuz API ({detail}), app ID invalid?"),
            });
        }

        let album: dto::AlbumMetadata = response.error_for_status()?.json()?;
        if album.id != id {
            return Err(ProviderError::Parse(format!(
                "Qobuz API returned album {} when asked for {}",
                album.id, id
            )));
        }
        Ok(album)
    }
}

#[async_trait]
impl CoverArtProvider for QobuzProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["qobuz.com", "open.qobuz.com"]
    }

    fn name(&self) -> &'static str {
        "Qobuz"
    }

    fn favicon(&self) -> &'static str {
        "https://www.qobuz.com/favicon.ico"
    }

    fn supports_url(&self, url: &Url) -> bool {
        Self::album_regex(url).is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(Self::album_regex(url), url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        let id = self
            .extract_id(url)
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;

        match self.fetch_album(&id).await {
            Ok(album) => adapter::to_cover_arts(&album),
            Err(e) if e.is_credential_error() => {
                tracing::error!(album = %id, "Qobuz API rejected credentials: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::warn!(
                    album = %id,
                    "Qobuz API lookup failed, constructing cover URL from ID: {}",
                    e
                );
                Ok(vec![CoverArt::front(id_to_cover_url(&id)?)])
            }
        }
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}
