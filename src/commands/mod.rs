//! Command handlers for the mdcast CLI.
//!
//! Each subcommand has its own module with a public `run` function that
//! `main()` dispatches to.

pub mod config;
pub mod feed;
pub mod messages;
pub mod post;

use mdcast::config::{Config, ConfigError};

use crate::Cli;

/// Load the config honoring a `--config` override.
pub(crate) fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
