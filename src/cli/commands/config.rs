//! Config file inspection.

use std::path::Path;

use crate::config::{self, Config};

/// Print the active configuration, optionally writing it to disk.
pub fn cmd_config(config: &Config, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    println!("# {}", target.display());
    println!("{}", toml::to_string_pretty(config)?);

    if init {
        match path {
            Some(p) => config::save_to(config, p)?,
            None => config::save(config)?,
        }
        println!("Wrote {}", target.display());
    }
    Ok(())
}
