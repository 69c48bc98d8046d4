//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`ProviderError`] for one discovery call, [`RegistryError`] for registry
//! construction), while CLI/main uses `anyhow` for convenient error
//! propagation.
//!
//! # Example
//!
//! ```ignore
//! use cover_scout::error::{Error, Result, ResultExt};
//!
//! fn lookup(registry: &ProviderRegistry, raw: &str) -> Result<&dyn CoverArtProvider> {
//!     let url = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e))?;
//!     registry
//!         .get_provider(&url)
//!         .ok_or_else(|| Error::UnsupportedUrl(raw.to_string()))
//! }
//! ```

use std::path::PathBuf;

use crate::providers::{ProviderError, RegistryError};

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while discovering images
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Invalid provider set
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Input is not a URL at all
    #[error("Invalid URL {input}: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// No provider handles this URL
    #[error("No provider supports {0}")]
    UnsupportedUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file not found
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid URL error.
    pub fn invalid_url(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The provider error at the root of this error, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(e) => Some(e),
            Self::WithContext { source, .. } => source.provider_error(),
            _ => None,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ProviderError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Provider(e).context(ctx))
    }
}
