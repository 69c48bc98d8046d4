//! Site adapters, one per supported external website.

pub mod beatport;
pub mod booth;
pub mod deezer;
pub mod musicbrainz;
pub mod qobuz;
pub mod spotify;
pub mod traxsource;

use std::sync::Arc;

use super::http::HttpClient;
use super::traits::CoverArtProvider;
use crate::config::Config;

pub use beatport::BeatportProvider;
pub use booth::BoothProvider;
pub use deezer::DeezerProvider;
pub use musicbrainz::{CoverArtArchiveProvider, MusicBrainzProvider};
pub use qobuz::QobuzProvider;
pub use spotify::SpotifyProvider;
pub use traxsource::TraxsourceProvider;

/// Every built-in provider, sharing one HTTP client.
pub fn default_providers(http: &HttpClient, config: &Config) -> Vec<Arc<dyn CoverArtProvider>> {
    let qobuz = match config.credentials.qobuz_app_id.as_deref() {
        Some(app_id) => QobuzProvider::with_app_id(http.clone(), app_id),
        None => QobuzProvider::new(http.clone()),
    };

    vec![
        Arc::new(BeatportProvider::new(http.clone())),
        Arc::new(BoothProvider::new(http.clone())),
        Arc::new(CoverArtArchiveProvider::new(http.clone())),
        Arc::new(DeezerProvider::new(http.clone())),
        Arc::new(MusicBrainzProvider::new(http.clone())),
        Arc::new(qobuz),
        Arc::new(SpotifyProvider::new(http.clone())),
        Arc::new(TraxsourceProvider::new(http.clone())),
    ]
}
