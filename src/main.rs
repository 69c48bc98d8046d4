//! Cover Scout - find importable cover art on music store pages.
//!
//! Given a release page on a supported site (Qobuz, BOOTH, Deezer, ...), the
//! matching provider lists candidate images with their artwork types, ready
//! to be added to a MusicBrainz release.

pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let directive = if args.verbose {
        "cover_scout=debug"
    } else {
        "cover_scout=info"
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    cli::run_command(&args)
}
