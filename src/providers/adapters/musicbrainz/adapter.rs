//! Adapter layer: Convert Cover Art Archive DTOs to cover art candidates

use super::dto;
use crate::providers::domain::{ArtworkType, CoverArt, ProviderError, parse_url};

/// Convert a release listing to candidates, in listing order.
///
/// Unknown type names are dropped with a debug log; an empty comment is
/// treated as no comment.
pub fn to_cover_arts(listing: &dto::ReleaseListing) -> Result<Vec<CoverArt>, ProviderError> {
    listing
        .images
        .iter()
        .map(|image| {
            let types = image
                .types
                .iter()
                .filter_map(|name| {
                    let parsed = ArtworkType::from_name(name);
                    if parsed.is_none() {
                        tracing::debug!(type_name = %name, "unknown artwork type");
                    }
                    parsed
                })
                .collect();

            let mut cover = CoverArt::new(parse_url(&image.image)?).with_types(types);
            if let Some(comment) = image.comment.as_deref().filter(|c| !c.trim().is_empty()) {
                cover = cover.with_comment(comment);
            }
            Ok(cover)
        })
        .collect()
}
