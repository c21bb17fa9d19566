//! Handler for the `messages` command.

use anyhow::{Result, bail};

use mdcast::client::{LinkedinClient, TwitterClient};
use mdcast::markdown::Network;
use mdcast::output;

use crate::Cli;

pub fn run(network: &str, count: usize, cli: &Cli) -> Result<()> {
    let network: Network = network.parse().map_err(anyhow::Error::msg)?;
    let cfg = crate::commands::load_config(cli)?;

    let messages = match network {
        Network::Twitter => {
            if !cfg.has_twitter() {
                bail!("twitter not configured, run 'mdcast config init'");
            }
            TwitterClient::new(&cfg.twitter).direct_messages(count)?
        }
        Network::Linkedin => {
            if !cfg.has_linkedin() {
                bail!("linkedin not configured, run 'mdcast config init'");
            }
            LinkedinClient::new(&cfg.linkedin).messages(count)?
        }
    };

    if cli.json {
        output::print_json(&messages)
    } else {
        output::print_messages(&messages);
        Ok(())
    }
}
