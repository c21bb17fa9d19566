//! Handler for the `config` command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use mdcast::config::{Config, ConfigError};
use mdcast::output::{self, ConfigDisplay, LinkedinDisplay, TwitterDisplay, redact};

use crate::{Cli, ConfigAction};

pub fn run(action: &ConfigAction, cli: &Cli) -> Result<()> {
    match action {
        ConfigAction::Init => init(cli),
        ConfigAction::Show => show(cli),
        ConfigAction::Set { key, value } => set(key, value, cli),
    }
}

fn init(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("mdcast configuration setup");
    println!("==========================");
    println!();
    println!("Twitter (leave blank to skip):");

    let mut cfg = Config::default();
    cfg.twitter.access_token = prompt(&mut reader, "  Access Token: ")?;
    cfg.twitter.user_id = prompt(&mut reader, "  User ID: ")?;

    println!();
    println!("LinkedIn (leave blank to skip):");
    cfg.linkedin.access_token = prompt(&mut reader, "  Access Token: ")?;
    cfg.linkedin.person_urn = prompt(&mut reader, "  Person URN (e.g. urn:li:person:abc123): ")?;

    let path = save(&cfg, cli)?;
    println!("\nConfig saved to {path}");
    Ok(())
}

fn show(cli: &Cli) -> Result<()> {
    let cfg = crate::commands::load_config(cli)?;

    let display = ConfigDisplay {
        twitter: TwitterDisplay {
            access_token: redact(&cfg.twitter.access_token),
            user_id: cfg.twitter.user_id,
        },
        linkedin: LinkedinDisplay {
            access_token: redact(&cfg.linkedin.access_token),
            person_urn: cfg.linkedin.person_urn,
        },
    };

    if cli.json {
        output::print_json(&display)
    } else {
        output::print_config(&display);
        Ok(())
    }
}

fn set(key: &str, value: &str, cli: &Cli) -> Result<()> {
    // Start from the existing config when there is one.
    let mut cfg = match crate::commands::load_config(cli) {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound { .. }) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    cfg.set(key, value)?;
    save(&cfg, cli)?;
    println!("Set {key}");
    Ok(())
}

/// Save honoring a `--config` override; returns the path written.
fn save(cfg: &Config, cli: &Cli) -> Result<String> {
    match &cli.config {
        Some(path) => {
            cfg.save_to(path)?;
            Ok(path.display().to_string())
        }
        None => {
            let path = cfg.save()?;
            Ok(path.display().to_string())
        }
    }
}

fn prompt(reader: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    reader.read_line(&mut line).context("failed to read input")?;
    Ok(line.trim().to_string())
}
