//! Cover Art Archive listing DTOs
//!
//! Only what the adapter reads: each image's URL, its type names and its
//! comment. See https://wiki.musicbrainz.org/Cover_Art_Archive/API

use serde::Deserialize;

/// `GET /release/<mbid>/`
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseListing {
    #[serde(default)]
    pub images: Vec<ListedImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListedImage {
    /// Full-size image URL
    pub image: String,
    /// Type names as shown on MusicBrainz, e.g. "Front" or "Raw/Unedited"
    #[serde(default)]
    pub types: Vec<String>,
    /// Free-text comment; often `""`, sometimes `null`
    #[serde(default)]
    pub comment: Option<String>,
}
