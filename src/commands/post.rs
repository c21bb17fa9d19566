//! Handler for the `post` command.

use std::fs;

use anyhow::{Context, Result, bail};

use mdcast::client::{LinkedinClient, TwitterClient};
use mdcast::markdown::{Network, compose};
use mdcast::output::{self, DryRunReport, PostResult};

use crate::{Cli, PostArgs};

pub fn run(args: &PostArgs, cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("input unavailable: cannot read {}", args.file.display()))?;

    let networks = parse_networks(&args.network)?;

    if args.dry_run {
        dry_run(&content, &networks, cli.json)
    } else {
        publish(&content, &networks, cli)
    }
}

fn parse_networks(spec: &str) -> Result<Vec<Network>> {
    spec.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<Network>().map_err(anyhow::Error::msg))
        .collect()
}

fn dry_run(content: &str, networks: &[Network], json: bool) -> Result<()> {
    let reports: Vec<DryRunReport> = networks
        .iter()
        .map(|&network| DryRunReport {
            network: network.to_string(),
            chunks: compose(content, network),
        })
        .collect();

    if json {
        output::print_json(&reports)
    } else {
        output::print_dry_run(&reports);
        Ok(())
    }
}

fn publish(content: &str, networks: &[Network], cli: &Cli) -> Result<()> {
    let cfg = crate::commands::load_config(cli)?;
    let mut results: Vec<PostResult> = Vec::new();

    for &network in networks {
        match network {
            Network::Twitter => {
                if !cfg.has_twitter() {
                    bail!("twitter not configured, run 'mdcast config init'");
                }
                let client = TwitterClient::new(&cfg.twitter);
                let chunks = compose(content, network);
                if chunks.len() == 1 {
                    results.push(client.post_status(&chunks[0])?);
                } else {
                    log::info!("posting thread of {} tweets", chunks.len());
                    results.extend(client.post_thread(&chunks)?);
                }
            }
            Network::Linkedin => {
                if !cfg.has_linkedin() {
                    bail!("linkedin not configured, run 'mdcast config init'");
                }
                let client = LinkedinClient::new(&cfg.linkedin);
                let chunks = compose(content, network);
                results.push(client.create_post(&chunks[0])?);
            }
        }
    }

    if cli.json {
        output::print_json(&results)
    } else {
        output::print_post_results(&results);
        Ok(())
    }
}
