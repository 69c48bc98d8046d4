//! Hostname-based dispatch to cover art providers.
//!
//! The [`ProviderRegistry`] maps every domain a provider claims to that
//! provider. It is built once at startup and is read-only afterwards.
//!
//! Domain patterns are either exact hostnames (`qobuz.com`) or wildcards
//! (`*.booth.pm`) matching any subdomain. A leading `www.` is stripped from
//! looked-up hostnames before matching.
//!
//! # Examples
//!
//! ```rust,ignore
//! let registry = ProviderRegistry::with_default_providers(http, &config)?;
//! if let Some(provider) = registry.get_provider(&url) {
//!     let covers = provider.find_images(&url).await?;
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use super::traits::CoverArtProvider;

/// Errors raised while building a registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Domain {domain} is claimed by both {existing} and {new}")]
    DuplicateDomain {
        domain: String,
        existing: &'static str,
        new: &'static str,
    },
}

/// Immutable domain-to-provider lookup table.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn CoverArtProvider>>,
    by_domain: HashMap<String, Arc<dyn CoverArtProvider>>,
}

impl ProviderRegistry {
    /// Build a registry from providers, in registration order.
    ///
    /// Fails if two providers claim the same domain pattern.
    pub fn new(providers: Vec<Arc<dyn CoverArtProvider>>) -> Result<Self, RegistryError> {
        let mut by_domain: HashMap<String, Arc<dyn CoverArtProvider>> = HashMap::new();

        for provider in &providers {
            for domain in provider.supported_domains() {
                let key = domain.to_ascii_lowercase();
                if let Some(existing) = by_domain.get(&key) {
                    return Err(RegistryError::DuplicateDomain {
                        domain: key,
                        existing: existing.name(),
                        new: provider.name(),
                    });
                }
                by_domain.insert(key, Arc::clone(provider));
            }
        }

        tracing::debug!(
            providers = providers.len(),
            domains = by_domain.len(),
            "built provider registry"
        );

        Ok(Self {
            providers,
            by_domain,
        })
    }

    /// Look up a provider by hostname only, without checking the path.
    pub fn get_provider_by_domain(&self, url: &Url) -> Option<&dyn CoverArtProvider> {
        let host = url.host_str()?.to_ascii_lowercase();
        let domain = extract_domain(&host);

        if let Some(provider) = self.by_domain.get(domain) {
            return Some(provider.as_ref());
        }

        // Walk up parent domains looking for a wildcard claim.
        let mut rest = domain;
        while let Some((_, parent)) = rest.split_once('.') {
            if let Some(provider) = self.by_domain.get(&format!("*.{parent}")) {
                return Some(provider.as_ref());
            }
            rest = parent;
        }

        None
    }

    /// Find the provider that can extract images from `url`, if any.
    pub fn get_provider(&self, url: &Url) -> Option<&dyn CoverArtProvider> {
        let provider = self.get_provider_by_domain(url)?;
        if provider.supports_url(url) {
            Some(provider)
        } else {
            tracing::debug!(provider = provider.name(), %url, "URL shape not supported");
            None
        }
    }

    /// All registered providers, in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &dyn CoverArtProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Hostname with a leading `www.` removed.
pub fn extract_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
