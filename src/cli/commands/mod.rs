//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `find`: Discover cover art for one or more release URLs
//! - `providers`: List providers and check which one handles a URL
//! - `config`: Show or initialise the config file

mod config;
mod find;
mod providers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::providers::{HttpClient, ProviderRegistry};

pub use config::cmd_config;
pub use find::cmd_find;
pub use providers::{cmd_check, cmd_providers};

/// Cover Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Qobuz app ID (overrides the config file)
    #[arg(long, global = true, env = "QOBUZ_APP_ID")]
    pub qobuz_app_id: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Find cover art for release URLs
    Find {
        /// Release page URLs
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported providers
    Providers,
    /// Show which provider handles a URL, without fetching anything
    Check {
        /// Release page URL
        url: String,
    },
    /// Show the active configuration
    Config {
        /// Write the active configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => crate::config::load_required(path)?,
        None => crate::config::load(),
    };
    if let Some(app_id) = &cli.qobuz_app_id {
        config.credentials.qobuz_app_id = Some(app_id.clone());
    }

    if let Commands::Config { init } = &cli.command {
        return cmd_config(&config, cli.config.as_deref(), *init);
    }

    let http = HttpClient::new(&config.http)?;
    let registry = ProviderRegistry::with_default_providers(&http, &config)?;
    tracing::debug!(providers = registry.len(), "registry ready");

    match &cli.command {
        Commands::Find { urls, json } => {
            let rt = Runtime::new()?;
            cmd_find(&rt, &registry, urls, *json)
        }
        Commands::Providers => {
            cmd_providers(&registry);
            Ok(())
        }
        Commands::Check { url } => cmd_check(&registry, url),
        Commands::Config { .. } => Ok(()),
    }
}
