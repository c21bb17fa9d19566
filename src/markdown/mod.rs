//!
//! Markdown-to-social-text core: parse a document, flatten it under
//! per-platform rules, and pack the result into thread-sized chunks.

pub mod ast;
pub mod bold;
pub mod render;
pub mod thread;

pub use ast::{Block, Inline, parse};
pub use bold::to_bold;
pub use render::{Network, extract_text, render};
pub use thread::{TWITTER_MAX_CHARS, split_thread};

/// Render a document for a network, split into ready-to-post entries.
///
/// Twitter output is thread-split against [`TWITTER_MAX_CHARS`]; LinkedIn
/// has no length cap and always yields a single entry.
pub fn compose(content: &str, network: Network) -> Vec<String> {
    match network {
        Network::Twitter => split_thread(&render(content, network), TWITTER_MAX_CHARS),
        Network::Linkedin => vec![render(content, network)],
    }
}
