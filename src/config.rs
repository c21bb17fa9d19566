//!
//! Credential configuration: a TOML file with one section per network,
//! stored under the platform config directory (`~/.config/mdcast` on
//! Linux). Tokens are supplied ready-made; no OAuth flow is performed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found at {}; run 'mdcast config init' first", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error("unknown config key '{0}' (expected e.g. twitter.access_token)")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub twitter: TwitterConfig,
    pub linkedin: LinkedinConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// OAuth2 user-context bearer token.
    pub access_token: String,
    /// Numeric account id, used for timeline lookups.
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinConfig {
    pub access_token: String,
    /// Member URN the posts are authored as, e.g. `urn:li:person:abc123`.
    pub person_urn: String,
}

/// Platform config directory for mdcast.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    use etcetera::{BaseStrategy, choose_base_strategy};

    let strategy = choose_base_strategy().map_err(|_| ConfigError::NoConfigDir)?;
    Ok(strategy.config_dir().join("mdcast"))
}

/// Default config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

impl Config {
    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path. The file is chmod 0600 on unix since it
    /// holds credentials.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
        }

        Ok(())
    }

    /// Update a single field addressed by dot notation, e.g.
    /// `twitter.access_token`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "twitter.access_token" => self.twitter.access_token = value.to_string(),
            "twitter.user_id" => self.twitter.user_id = value.to_string(),
            "linkedin.access_token" => self.linkedin.access_token = value.to_string(),
            "linkedin.person_urn" => self.linkedin.person_urn = value.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn has_twitter(&self) -> bool {
        !self.twitter.access_token.is_empty()
    }

    pub fn has_linkedin(&self) -> bool {
        !self.linkedin.access_token.is_empty() && !self.linkedin.person_urn.is_empty()
    }
}
