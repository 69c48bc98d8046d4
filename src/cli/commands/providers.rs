//! Provider listing and URL dispatch checks.

use url::Url;

use crate::providers::ProviderRegistry;

/// List every registered provider with its domains
pub fn cmd_providers(registry: &ProviderRegistry) {
    println!("Supported providers ({})", registry.len());
    println!("=======================");

    let mut providers: Vec<_> = registry.providers().collect();
    providers.sort_by_key(|p| p.name());

    for provider in providers {
        println!("{}", provider.name());
        println!("  Domains: {}", provider.supported_domains().join(", "));
        println!("  Icon:    {}", provider.favicon());
    }
}

/// What the registry would do with a URL
#[derive(Debug, PartialEq)]
enum CheckOutcome {
    /// A provider handles it; the release ID if it could be extracted
    Supported {
        provider: &'static str,
        id: Option<String>,
    },
    /// The domain is known, but not this kind of page
    UnsupportedPage { provider: &'static str },
    UnknownDomain,
}

fn check_url(registry: &ProviderRegistry, url: &Url) -> CheckOutcome {
    match registry.get_provider_by_domain(url) {
        Some(provider) if provider.supports_url(url) => CheckOutcome::Supported {
            provider: provider.name(),
            id: provider.extract_id(url),
        },
        Some(provider) => CheckOutcome::UnsupportedPage {
            provider: provider.name(),
        },
        None => CheckOutcome::UnknownDomain,
    }
}

/// Show which provider would handle `raw_url`
pub fn cmd_check(registry: &ProviderRegistry, raw_url: &str) -> anyhow::Result<()> {
    let url = Url::parse(raw_url.trim())
        .map_err(|e| crate::error::Error::invalid_url(raw_url, e))?;

    match check_url(registry, &url) {
        CheckOutcome::Supported { provider, id } => {
            println!("Provider: {}", provider);
            match id {
                Some(id) => println!("ID:       {}", id),
                None => println!("ID:       (none)"),
            }
        }
        CheckOutcome::UnsupportedPage { provider } => {
            println!("{} handles this domain, but not this kind of page", provider);
        }
        CheckOutcome::UnknownDomain => {
            println!("No provider for {}", url.host_str().unwrap_or(raw_url));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::{MockFetcher, mock_http, url};

    fn registry() -> ProviderRegistry {
        ProviderRegistry::with_default_providers(&mock_http(MockFetcher::new()), &Config::default())
            .unwrap()
    }

    #[test]
    fn test_check_supported_url() {
        let outcome = check_url(
            &registry(),
            &url("https://www.qobuz.com/fr-fr/album/some-title/0060075354770"),
        );
        assert_eq!(
            outcome,
            CheckOutcome::Supported {
                provider: "Qobuz",
                id: Some("0060075354770".to_string()),
            }
        );
    }

    #[test]
    fn test_check_unsupported_page() {
        let outcome = check_url(&registry(), &url("https://open.spotify.com/artist/12345"));
        assert_eq!(
            outcome,
            CheckOutcome::UnsupportedPage {
                provider: "Spotify"
            }
        );
    }

    #[test]
    fn test_check_unknown_domain() {
        let outcome = check_url(&registry(), &url("https://example.com/album/1"));
        assert_eq!(outcome, CheckOutcome::UnknownDomain);
    }

    #[test]
    fn test_check_rejects_garbage() {
        assert!(cmd_check(&registry(), "not a url").is_err());
    }
}
