//! Command-line interface for cover-scout.
//!
//! This module provides CLI commands for finding cover art on release
//! pages and checking which provider handles a URL.

mod commands;

pub use commands::{Cli, Commands, run_command};
