//! MusicBrainz and Cover Art Archive providers
//!
//! Both take a MusicBrainz release MBID and list the artwork already stored
//! in the Cover Art Archive for it, e.g. to copy art between releases.
//! A release without any art is a 404 from the archive, which we report as
//! an empty list rather than an error.

pub mod dto;
mod adapter;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError, parse_url};
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

const CAA_BASE: &str = "https://coverartarchive.org";

static RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/release/([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})(?:/.*)?$")
        .expect("valid regex")
});

/// List a release's artwork from the Cover Art Archive.
async fn list_release_art(http: &HttpClient, mbid: &str) -> Result<Vec<CoverArt>, ProviderError> {
    let url = parse_url(&format!("{CAA_BASE}/release/{mbid}/"))?;

    match http.get_json::<dto::ReleaseListing>(&url).await {
        Ok(response) => adapter::to_cover_arts(&response),
        Err(ProviderError::NotFound(_)) => {
            tracing::debug!(release = %mbid, "no artwork in the Cover Art Archive");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Release pages on musicbrainz.org
pub struct MusicBrainzProvider {
    http: HttpClient,
}

impl MusicBrainzProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for MusicBrainzProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["musicbrainz.org", "beta.musicbrainz.org"]
    }

    fn name(&self) -> &'static str {
        "MusicBrainz"
    }

    fn favicon(&self) -> &'static str {
        "https://musicbrainz.org/static/images/favicons/favicon-32x32.png"
    }

    fn supports_url(&self, url: &Url) -> bool {
        RELEASE.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&RELEASE, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        let mbid = self
            .extract_id(url)
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;
        list_release_art(&self.http, &mbid).await
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Release listings on coverartarchive.org
pub struct CoverArtArchiveProvider {
    http: HttpClient,
}

impl CoverArtArchiveProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for CoverArtArchiveProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["coverartarchive.org"]
    }

    fn name(&self) -> &'static str {
        "Cover Art Archive"
    }

    fn favicon(&self) -> &'static str {
        "https://coverartarchive.org/img/favicon.png"
    }

    fn supports_url(&self, url: &Url) -> bool {
        RELEASE.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&RELEASE, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        let mbid = self
            .extract_id(url)
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;
        list_release_art(&self.http, &mbid).await
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}
