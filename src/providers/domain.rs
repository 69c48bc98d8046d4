//! Internal domain models for cover art discovery.
//!
//! These types are OUR types - they don't change when a provider's site
//! changes. Every adapter converts whatever the site exposes into these.

use serde::{Serialize, Serializer};
use url::Url;

/// A cover art candidate found by a provider, ready for import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverArt {
    /// Absolute URL of the image or document to fetch
    pub url: Url,
    /// Artwork types to set (may be empty)
    pub types: Vec<ArtworkType>,
    /// Comment to set
    pub comment: Option<String>,
}

impl CoverArt {
    /// Candidate with no types and no comment.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            types: Vec::new(),
            comment: None,
        }
    }

    /// Candidate tagged as the front cover.
    pub fn front(url: Url) -> Self {
        Self::new(url).with_types(vec![ArtworkType::Front])
    }

    pub fn with_types(mut self, types: Vec<ArtworkType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// MusicBrainz artwork types.
///
/// Discriminants are the IDs used by the MusicBrainz cover art editor, so
/// they must never be renumbered. Serialized as that ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArtworkType {
    Front = 1,
    Back = 2,
    Booklet = 3,
    Medium = 4,
    Obi = 5,
    Spine = 6,
    Track = 7,
    Other = 8,
    Tray = 9,
    Sticker = 10,
    Poster = 11,
    Liner = 12,
    Watermark = 13,
    Raw = 14,
}

impl ArtworkType {
    pub const ALL: [ArtworkType; 14] = [
        Self::Front,
        Self::Back,
        Self::Booklet,
        Self::Medium,
        Self::Obi,
        Self::Spine,
        Self::Track,
        Self::Other,
        Self::Tray,
        Self::Sticker,
        Self::Poster,
        Self::Liner,
        Self::Watermark,
        Self::Raw,
    ];

    /// MusicBrainz artwork type ID
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Name as displayed by MusicBrainz and the Cover Art Archive
    pub fn name(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
            Self::Booklet => "Booklet",
            Self::Medium => "Medium",
            Self::Obi => "Obi",
            Self::Spine => "Spine",
            Self::Track => "Track",
            Self::Other => "Other",
            Self::Tray => "Tray",
            Self::Sticker => "Sticker",
            Self::Poster => "Poster",
            Self::Liner => "Liner",
            Self::Watermark => "Watermark",
            Self::Raw => "Raw/Unedited",
        }
    }

    /// Parse a type name, case-insensitively. "Raw" is accepted as a short
    /// form of "Raw/Unedited".
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("raw") {
            return Some(Self::Raw);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl Serialize for ArtworkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl std::fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while discovering images for one release
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error(
        "Refusing to extract images from {provider} provider because the original URL {original} \
         redirected to {redirected}, which may be a different release. If this redirected URL is \
         correct, please retry with {redirected} directly."
    )]
    UnsafeRedirect {
        provider: String,
        original: String,
        redirected: String,
    },

    #[error("{provider}: required element `{selector}` not found on {url}")]
    MissingElement {
        provider: String,
        selector: String,
        url: String,
    },

    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("{provider}: {message}")]
    InvalidCredentials { provider: String, message: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    pub fn missing_element(
        provider: impl Into<String>,
        selector: impl Into<String>,
        url: &Url,
    ) -> Self {
        Self::MissingElement {
            provider: provider.into(),
            selector: selector.into(),
            url: url.to_string(),
        }
    }

    /// Whether this is a credential/configuration problem rather than a
    /// problem with the release itself.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::InvalidCredentials { .. })
    }
}

/// Parse an absolute URL found in a provider response.
pub(crate) fn parse_url(raw: &str) -> Result<Url, ProviderError> {
    Url::parse(raw).map_err(|e| ProviderError::InvalidUrl(format!("{raw}: {e}")))
}
