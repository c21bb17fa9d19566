//!
//! Blocking HTTP clients for the two posting targets.
//!
//! Both clients authenticate with a pre-provisioned bearer token from the
//! config file and decode JSON responses into the [`crate::output`] result
//! types. Failed requests map HTTP status codes onto [`ApiError`]; there is
//! no retry or backoff here.

pub mod linkedin;
pub mod twitter;

pub use linkedin::LinkedinClient;
pub use twitter::TwitterClient;

use thiserror::Error;
use ureq::Agent;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed (401): check your {0} credentials")]
    Auth(&'static str),
    #[error("forbidden (403): check your {0} API permissions")]
    Forbidden(&'static str),
    #[error("rate limited (429): too many requests, try again later")]
    RateLimited,
    #[error("{network} API error ({status}): {message}")]
    Api {
        network: &'static str,
        status: u16,
        message: String,
    },
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Agent that reports HTTP error statuses through the response instead of
/// `Err`, so the clients can decode the platform's error body.
pub(crate) fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
