//! Adapter layer: Convert Qobuz DTOs to cover art candidates
//!
//! This is the ONLY place where Qobuz DTO types are converted to domain
//! types, together with the ID-to-URL rule used when the API is unavailable.

use url::Url;

use super::dto;
use crate::providers::domain::{ArtworkType, CoverArt, ProviderError, parse_url};

/// Comment set on goodies recognised as booklets
pub const BOOKLET_COMMENT: &str = "Qobuz booklet";

const COVER_BASE: &str = "https://static.qobuz.com/images/covers";

/// Convert an album response to candidates: front cover first, then goodies.
pub fn to_cover_arts(album: &dto::AlbumMetadata) -> Result<Vec<CoverArt>, ProviderError> {
    let mut covers = vec![CoverArt::front(original_size(&album.image.large)?)];
    covers.extend(extract_goodies(&album.goodies));
    Ok(covers)
}

/// Goodies with a download URL, typed as booklets where the name says so.
pub fn extract_goodies(goodies: &[dto::Goodie]) -> Vec<CoverArt> {
    goodies
        .iter()
        .filter_map(|goodie| {
            let raw = goodie.original_url.as_deref()?;
            let url = match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!(goodie = goodie.id, "skipping goodie with bad URL: {}", e);
                    return None;
                }
            };

            Some(if is_booklet(&goodie.name) {
                CoverArt::new(url)
                    .with_types(vec![ArtworkType::Booklet])
                    .with_comment(BOOKLET_COMMENT)
            } else {
                CoverArt::new(url).with_comment(goodie.name.clone())
            })
        })
        .collect()
}

/// "Livret Numérique" on the French-language API, "booklet" elsewhere.
fn is_booklet(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("livret") || name.contains("booklet")
}

/// Rewrite a sized cover URL (`_600.jpg`) to the original (`_org.jpg`).
fn original_size(raw: &str) -> Result<Url, ProviderError> {
    let rewritten = match raw.rsplit_once('_') {
        Some((base, suffix)) if suffix.contains('.') && !suffix.contains('/') => {
            let ext = suffix.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("jpg");
            format!("{base}_org.{ext}")
        }
        _ => raw.to_string(),
    };
    parse_url(&rewritten)
}

/// Build the original cover URL from an album ID alone.
///
/// Covers live under two directory levels made from the last four
/// characters of the ID, in reverse pairs. IDs shorter than four characters
/// produce a nonsensical URL; Qobuz IDs are always longer.
pub fn id_to_cover_url(id: &str) -> Result<Url, ProviderError> {
    let chars: Vec<char> = id.chars().collect();
    let n = chars.len();
    if n < 4 {
        return Err(ProviderError::InvalidUrl(format!("Qobuz album ID too short: {id}")));
    }
    let d1: String = chars[n - 2..].iter().collect();
    let d2: String = chars[n - 4..n - 2].iter().collect();
    parse_url(&format!("{COVER_BASE}/{d1}/{d2}/{id}_org.jpg"))
}
