//! The contract every cover art provider implements.
//!
//! A provider owns one external website. The registry picks a provider by
//! hostname, [`CoverArtProvider::supports_url`] confirms the URL shape, and
//! [`CoverArtProvider::find_images`] does the actual network work.
//!
//! Redirect safety lives here, once, in [`CoverArtProvider::fetch_page_dom`]:
//! a page that redirected to a different release must never have its images
//! imported for the release that was asked for.

use async_trait::async_trait;
use scraper::Html;
use url::Url;

use super::domain::{CoverArt, ProviderError};
use super::http::HttpClient;

/// Trait for site adapters.
///
/// Implementations are constructed once at startup and shared behind an
/// `Arc`, so they must not hold mutable state.
#[async_trait]
pub trait CoverArtProvider: Send + Sync {
    /// Domains supported by the provider, without `www.`.
    ///
    /// `*.example.com` claims every subdomain of `example.com`.
    fn supported_domains(&self) -> &[&'static str];

    /// Provider name, used in import buttons and error messages.
    fn name(&self) -> &'static str;

    /// URL of the provider's favicon.
    fn favicon(&self) -> &'static str;

    /// Whether images can be extracted for this URL. Must not touch the
    /// network.
    fn supports_url(&self, url: &Url) -> bool;

    /// Extract the release ID from a release URL.
    fn extract_id(&self, url: &Url) -> Option<String>;

    /// Find the release's images.
    ///
    /// Only called with URLs that passed [`Self::supports_url`].
    async fn find_images(&self, url: &Url) -> Result<Vec<CoverArt>, ProviderError>;

    /// HTTP handle used by the default page fetch.
    fn http(&self) -> &HttpClient;

    /// Whether both URLs point to the same release.
    fn is_safe_redirect(&self, original: &Url, redirected: &Url) -> bool {
        match self.extract_id(original) {
            Some(id) => self.extract_id(redirected).as_deref() == Some(id.as_str()),
            None => false,
        }
    }

    /// Fetch a page and parse it into a document.
    ///
    /// Fails if the request was redirected to a URL that is not the same
    /// release.
    async fn fetch_page_dom(&self, url: &Url) -> Result<Html, ProviderError> {
        let response = self.http().get(url).await?;

        if response.final_url != *url && !self.is_safe_redirect(url, &response.final_url) {
            tracing::warn!(
                provider = self.name(),
                original = %url,
                redirected = %response.final_url,
                "refusing unsafe redirect"
            );
            return Err(ProviderError::UnsafeRedirect {
                provider: self.name().to_string(),
                original: url.to_string(),
                redirected: response.final_url.to_string(),
            });
        }

        let response = response.error_for_status()?;
        Ok(Html::parse_document(&response.body))
    }
}

/// Run a regex against the URL path and return the first capture group.
pub(crate) fn capture_id(re: &regex::Regex, url: &Url) -> Option<String> {
    re.captures(url.path())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::{MockFetcher, StubProvider};
    use proptest::prelude::*;
    use std::sync::Arc;

    proptest! {
        #[test]
        fn redirect_safe_iff_ids_equal(a in 0u32..1000, b in 0u32..1000) {
            let provider = StubProvider::new(HttpClient::with_fetcher(Arc::new(MockFetcher::new())));
            let original = Url::parse(&format!("https://stub.example/release/{a}")).unwrap();
            let redirected = Url::parse(&format!("https://stub.example/release/{b}")).unwrap();
            prop_assert_eq!(provider.is_safe_redirect(&original, &redirected), a == b);
        }
    }
}
