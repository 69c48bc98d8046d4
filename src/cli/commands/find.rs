//! Cover art discovery command.

use futures::future::join_all;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::error::Error;
use crate::providers::{CoverArt, Discovery, ProviderRegistry, discover};

/// One line of `find --json` output
#[derive(Serialize)]
#[serde(untagged)]
enum FindOutput<'a> {
    Found(&'a Discovery),
    Failed { url: &'a str, error: String },
}

/// Find cover art for every URL concurrently and print the results.
pub fn cmd_find(
    rt: &Runtime,
    registry: &ProviderRegistry,
    urls: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let results = rt.block_on(join_all(urls.iter().map(|url| discover(registry, url))));

    let failed = results.iter().filter(|r| r.is_err()).count();

    if json {
        let output: Vec<FindOutput<'_>> = urls
            .iter()
            .zip(&results)
            .map(|(url, result)| match result {
                Ok(discovery) => FindOutput::Found(discovery),
                Err(e) => FindOutput::Failed {
                    url,
                    error: e.to_string(),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for result in &results {
            match result {
                Ok(discovery) => print_discovery(discovery),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    if let Some(hint) = failure_hint(e) {
                        eprintln!("  {}", hint);
                    }
                }
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} URLs failed", failed, urls.len());
    }
    Ok(())
}

fn print_discovery(discovery: &Discovery) {
    println!("{} ({})", discovery.url, discovery.provider);
    if discovery.images.is_empty() {
        println!("  No images found");
    }
    for cover in &discovery.images {
        println!("  {}", format_cover(cover));
    }
    println!();
}

/// Advice for failures the user can fix themselves.
fn failure_hint(err: &Error) -> Option<&'static str> {
    err.provider_error()
        .filter(|e| e.is_credential_error())
        .map(|_| "Set a working app ID with --qobuz-app-id or in the config file")
}

/// `[Front, Back] https://... - comment`
fn format_cover(cover: &CoverArt) -> String {
    let types = cover
        .types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut line = format!("[{}] {}", types, cover.url);
    if let Some(comment) = &cover.comment {
        line.push_str(" - ");
        line.push_str(comment);
    }
    line
}
