//! Deezer provider
//!
//! Uses the public album API. Deezer answers unknown albums with HTTP 200
//! and an error object, so the status alone doesn't tell us much.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::providers::domain::{CoverArt, ProviderError, parse_url};
use crate::providers::http::HttpClient;
use crate::providers::traits::{CoverArtProvider, capture_id};

const API_BASE: &str = "https://api.deezer.com";

/// Deezer's "quota exceeded" exception code
const QUOTA: u32 = 4;
/// Deezer's "no data" exception code
const NO_DATA: u32 = 800;

static ALBUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:[a-z]{2}/)?album/(\d+)/?$").expect("valid regex"));

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AlbumResponse {
    Error { error: ApiError },
    Album { cover_xl: Option<String> },
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
    code: Option<u32>,
}

pub struct DeezerProvider {
    http: HttpClient,
}

impl DeezerProvider {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CoverArtProvider for DeezerProvider {
    fn supported_domains(&self) -> &[&'static str] {
        &["deezer.com"]
    }

    fn name(&self) -> &'static str {
        "Deezer"
    }

    fn favicon(&self) -> &'static str {
        "https://e-cdns-files.dzcdn.net/cache/images/common/favicon/favicon-16x16.png"
    }

    fn supports_url(&self, url: &Url) -> bool {
        ALBUM.is_match(url.path())
    }

    fn extract_id(&self, url: &Url) -> Option<String> {
        capture_id(&ALBUM, url)
    }

    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError> {
        let id = self
            .extract_id(url)
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;
        let api_url = parse_url(&format!("{API_BASE}/album/{id}"))?;

        match self.http.get_json::<AlbumResponse>(&api_url).await? {
            AlbumResponse::Error { error } if error.code == Some(NO_DATA) => {
                Err(ProviderError::NotFound(url.to_string()))
            }
            AlbumResponse::Error { error } if error.code == Some(QUOTA) => {
                Err(ProviderError::RateLimited)
            }
            AlbumResponse::Error { error } => Err(ProviderError::Parse(format!(
                "Deezer API error {}: {}",
                error.kind.as_deref().unwrap_or("unknown"),
                error.message.as_deref().unwrap_or("no message")
            ))),
            AlbumResponse::Album { cover_xl: Some(cover) } => {
                Ok(vec![CoverArt::front(parse_url(&cover)?)])
            }
            AlbumResponse::Album { cover_xl: None } => Ok(Vec::new()),
        }
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}
