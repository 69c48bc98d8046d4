//! Discovery for sites whose only usable artwork is the page's `og:image`.
//!
//! Adapters compose this by delegating their `find_images` to
//! [`find_images`]; they only implement URL matching themselves.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use super::domain::{CoverArt, ProviderError};
use super::traits::CoverArtProvider;

const OG_IMAGE_SELECTOR: &str = r#"head > meta[property="og:image"]"#;

static OG_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(OG_IMAGE_SELECTOR).expect("valid og:image selector"));

/// Fetch the release page and return its `og:image` as the front cover.
pub async fn find_images<P>(provider: &P, url: &Url) -> Result<Vec<CoverArt>, ProviderError>
where
    P: CoverArtProvider + ?Sized,
{
    let document = provider.fetch_page_dom(url).await?;
    let cover_url = og_image_url(&document, url)
        .ok_or_else(|| ProviderError::missing_element(provider.name(), OG_IMAGE_SELECTOR, url))?;

    tracing::debug!(provider = provider.name(), %cover_url, "found og:image");
    Ok(vec![CoverArt::front(cover_url)])
}

/// First `og:image` of the document, resolved against the page URL.
fn og_image_url(document: &Html, page_url: &Url) -> Option<Url> {
    let content = document
        .select(&OG_IMAGE)
        .next()?
        .value()
        .attr("content")?
        .trim();
    if content.is_empty() {
        return None;
    }
    page_url.join(content).ok()
}
