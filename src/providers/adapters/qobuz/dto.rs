//! Qobuz API Data Transfer Objects
//!
//! These structs match the undocumented `album/get` endpoint of the Qobuz
//! web player API. Only the fields we use are modelled; serde ignores the
//! rest.

use serde::Deserialize;

/// Response from `album/get`
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumMetadata {
    /// Album ID, same as the one in the URL
    pub id: String,
    pub image: AlbumImages,
    /// Supplementary downloads (booklets, videos, ...)
    #[serde(default)]
    pub goodies: Vec<Goodie>,
}

/// Cover image URLs in several sizes
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumImages {
    /// 600px image, e.g. `.../0825646089178_600.jpg`
    pub large: String,
    pub small: Option<String>,
    pub thumbnail: Option<String>,
    pub back: Option<String>,
}

/// A supplementary asset attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct Goodie {
    pub id: u64,
    pub file_format_id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Null for goodies that can't be downloaded directly (e.g. videos)
    pub url: Option<String>,
    pub original_url: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: Option<String>,
    pub code: Option<u16>,
    pub message: String,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_album_with_goodies() {
        let json = r#"{
            "id": "0825646089178",
            "title": "The Endless River",
            "image": {
                "small": "https://static.qobuz.com/images/covers/78/91/0825646089178_230.jpg",
                "thumbnail": "https://static.qobuz.com/images/covers/78/91/0825646089178_50.jpg",
                "large": "https://static.qobuz.com/images/covers/78/91/0825646089178_600.jpg",
                "back": null
            },
            "goodies": [{
                "id": 111513,
                "file_format_id": 21,
                "name": "Livret Numérique",
                "description": "Pink Floyd - The Endless River",
                "url": "https://static.qobuz.com/goodies/07/000078807.pdf",
                "original_url": "https://static.qobuz.com/goodies/07/000078807.pdf"
            }]
        }"#;

        let album: AlbumMetadata = serde_json::from_str(json).expect("Should parse album");
        assert_eq!(album.id, "0825646089178");
        assert!(album.image.large.ends_with("_600.jpg"));
        assert_eq!(album.goodies.len(), 1);
        assert_eq!(album.goodies[0].name, "Livret Numérique");
    }

    #[test]
    fn test_parse_album_without_goodies() {
        let json = r#"{
            "id": "0060075330437",
            "image": {"large": "https://static.qobuz.com/images/covers/37/04/0060075330437_600.jpg"}
        }"#;

        let album: AlbumMetadata = serde_json::from_str(json).expect("Should parse album");
        assert!(album.goodies.is_empty());
    }

    #[test]
    fn test_parse_goodie_without_url() {
        let json = r#"{
            "id": 111512,
            "file_format_id": 52,
            "name": "Clip vidéo",
            "description": "Evrika (B)",
            "url": null,
            "original_url": null
        }"#;

        let goodie: Goodie = serde_json::from_str(json).expect("Should parse goodie");
        assert!(goodie.original_url.is_none());
    }

    #[test]
    fn test_parse_api_error() {
        let json = r#"{"status":"error","code":400,"message":"Invalid or missing app_id parameter (should be a non-empty string)"}"#;
        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.code, Some(400));
        assert!(error.message.contains("app_id"));
    }
}
