//!
//! Terminal output for command results: structured JSON with `--json`,
//! colored human-readable summaries otherwise.

use colored::Colorize;
use serde::Serialize;

/// Outcome of one published entry.
#[derive(Debug, Clone, Serialize)]
pub struct PostResult {
    pub network: String,
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub text: String,
}

/// Preview of what `post` would publish to one network.
#[derive(Debug, Clone, Serialize)]
pub struct DryRunReport {
    pub network: String,
    pub chunks: Vec<String>,
}

/// One entry of a feed, for either network. `reposts` is only reported
/// by Twitter.
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: String,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reposts: Option<u64>,
    pub replies: u64,
}

/// A direct message, for either network.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub created_at: String,
}

/// Redacted view of the stored credentials.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDisplay {
    pub twitter: TwitterDisplay,
    pub linkedin: LinkedinDisplay,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterDisplay {
    pub access_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedinDisplay {
    pub access_token: String,
    pub person_urn: String,
}

/// Pretty-print any serializable value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_post_results(results: &[PostResult]) {
    for result in results {
        println!("{} {}", "Posted to".green(), result.network.bold());
        if !result.id.is_empty() {
            println!("  ID: {}", result.id);
        }
        if !result.url.is_empty() {
            println!("  URL: {}", result.url);
        }
    }
}

pub fn print_dry_run(reports: &[DryRunReport]) {
    for report in reports {
        println!("{}", format!("=== Dry Run: {} ===", report.network).bold());
        for (i, chunk) in report.chunks.iter().enumerate() {
            if report.chunks.len() > 1 {
                println!(
                    "{}",
                    format!(
                        "--- Part {}/{} ({} chars) ---",
                        i + 1,
                        report.chunks.len(),
                        chunk.chars().count()
                    )
                    .dimmed()
                );
            }
            println!("{chunk}");
        }
        println!();
    }
}

pub fn print_feed(items: &[FeedItem]) {
    for item in items {
        match item.reposts {
            Some(reposts) => {
                println!("{} · {}", item.author.bold(), format_time(&item.created_at));
                println!("{}", item.text);
                println!(
                    "{}",
                    format!("♥ {}  🔁 {}  💬 {}", item.likes, reposts, item.replies).dimmed()
                );
            }
            None => {
                println!("{} · {}", item.author.bold(), format_time(&item.created_at));
                println!("{}", item.text);
                println!("{}", format!("👍 {}  💬 {}", item.likes, item.replies).dimmed());
            }
        }
        println!();
    }
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        println!(
            "[{}] {}: {}",
            format_time(&message.created_at),
            message.sender.bold(),
            message.text
        );
    }
}

pub fn print_config(display: &ConfigDisplay) {
    println!("{}", "Twitter:".bold());
    println!("  Access Token: {}", display.twitter.access_token);
    println!("  User ID:      {}", display.twitter.user_id);
    println!("{}", "LinkedIn:".bold());
    println!("  Access Token: {}", display.linkedin.access_token);
    println!("  Person URN:   {}", display.linkedin.person_urn);
}

/// Shorten an RFC 3339 timestamp to `Mon DD HH:MM`; anything unparseable
/// is shown as-is.
fn format_time(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Mask a secret for display, keeping the first and last four characters
/// of longer values.
pub fn redact(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return "(not set)".to_string();
    }
    if len <= 8 {
        return "*".repeat(len);
    }
    let head: String = secret.chars().take(4).collect();
    let tail: String = secret.chars().skip(len - 4).collect();
    format!("{head}{}{tail}", "*".repeat(len - 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_empty() {
        assert_eq!(redact(""), "(not set)");
    }

    #[test]
    fn redact_short_masks_everything() {
        assert_eq!(redact("abcdefgh"), "********");
    }

    #[test]
    fn redact_long_keeps_edges() {
        assert_eq!(redact("abcdefghijkl"), "abcd****ijkl");
    }

    #[test]
    fn format_time_falls_back_to_input() {
        assert_eq!(format_time("not-a-time"), "not-a-time");
    }

    #[test]
    fn format_time_parses_rfc3339() {
        assert_eq!(format_time("2026-03-05T14:30:00Z"), "Mar 05 14:30");
    }

    #[test]
    fn post_result_json_omits_empty_url() {
        let result = PostResult {
            network: "linkedin".to_string(),
            id: "1".to_string(),
            url: String::new(),
            text: "hi".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("url"));
    }
}
