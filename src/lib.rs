pub mod client;
pub mod config;
pub mod exit_codes;
pub mod markdown;
pub mod output;

pub use crate::client::{ApiError, LinkedinClient, TwitterClient};
pub use crate::config::{Config, ConfigError};
pub use crate::markdown::{Network, TWITTER_MAX_CHARS, compose, render, split_thread, to_bold};
