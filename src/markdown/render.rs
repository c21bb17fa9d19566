//!
//! Platform renderers: flatten the block tree into the plain text each
//! network expects. Twitter and LinkedIn share every rule except heading
//! emphasis (LinkedIn gets the Unicode bold transliteration) and the list
//! bullet glyph.

use std::fmt;
use std::str::FromStr;

use crate::markdown::ast::{self, Block, Inline};
use crate::markdown::bold::to_bold;

/// A posting target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Twitter,
    Linkedin,
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(Network::Twitter),
            "linkedin" => Ok(Network::Linkedin),
            other => Err(format!(
                "unknown network: {other} (use 'twitter' or 'linkedin')"
            )),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Twitter => write!(f, "twitter"),
            Network::Linkedin => write!(f, "linkedin"),
        }
    }
}

/// Render a Markdown document to plain text for the given network.
///
/// Walks top-level blocks in document order and applies the per-platform
/// formatting rules; the result is trimmed of surrounding whitespace.
pub fn render(source: &str, network: Network) -> String {
    let blocks = ast::parse(source);
    let mut out = String::new();
    for block in &blocks {
        render_block(block, network, &mut out);
    }
    out.trim().to_string()
}

fn render_block(block: &Block, network: Network, out: &mut String) {
    match block {
        Block::Heading(inlines) => {
            let text = extract_text(inlines);
            match network {
                Network::Twitter => out.push_str(&text),
                // LinkedIn has no real heading markup; fake bold with the
                // mathematical sans-serif bold code points.
                Network::Linkedin => out.push_str(&to_bold(&text)),
            }
            out.push_str("\n\n");
        }
        Block::Paragraph(inlines) => {
            out.push_str(&extract_text(inlines));
            out.push_str("\n\n");
        }
        Block::List(items) => {
            let bullet = match network {
                Network::Twitter => "- ",
                Network::Linkedin => "\u{2022} ",
            };
            for item in items {
                out.push_str(bullet);
                out.push_str(&extract_text(item));
                out.push('\n');
            }
            out.push('\n');
        }
        Block::CodeBlock(code) => {
            out.push_str(code.trim());
            out.push_str("\n\n");
        }
        Block::ThematicBreak => out.push_str("---\n\n"),
        Block::Blockquote(inlines) => {
            let text = extract_text(inlines);
            for line in text.split('\n') {
                out.push_str("> ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }
}

/// Flatten an inline run to plain text, markers stripped and links shown
/// as `text (url)`. The result is trimmed.
pub fn extract_text(inlines: &[Inline]) -> String {
    let mut buf = String::new();
    for inline in inlines {
        push_inline(inline, &mut buf);
    }
    buf.trim().to_string()
}

fn push_inline(inline: &Inline, buf: &mut String) {
    match inline {
        Inline::Text(text) | Inline::Code(text) => buf.push_str(text),
        Inline::Emphasis(children) => {
            for child in children {
                push_inline(child, buf);
            }
        }
        Inline::Link { children, dest } => {
            for child in children {
                push_inline(child, buf);
            }
            buf.push_str(" (");
            buf.push_str(dest);
            buf.push(')');
        }
        Inline::AutoLink(url) => buf.push_str(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_parses_case_insensitively() {
        assert_eq!("Twitter".parse::<Network>(), Ok(Network::Twitter));
        assert_eq!(" linkedin ".parse::<Network>(), Ok(Network::Linkedin));
        assert!("mastodon".parse::<Network>().is_err());
    }

    #[test]
    fn link_renders_text_and_destination() {
        let rendered = render("[click here](https://x.test)", Network::Twitter);
        assert_eq!(rendered, "click here (https://x.test)");
    }

    #[test]
    fn emphasis_markers_are_stripped() {
        let rendered = render("some *emphasized* and **strong** words", Network::Twitter);
        assert_eq!(rendered, "some emphasized and strong words");
    }

    #[test]
    fn inline_code_keeps_content_only() {
        let rendered = render("run `cargo build` now", Network::Twitter);
        assert_eq!(rendered, "run cargo build now");
    }

    #[test]
    fn list_bullets_differ_by_network() {
        let source = "- a\n- b\n\ntail";
        assert_eq!(render(source, Network::Twitter), "- a\n- b\n\ntail");
        assert_eq!(render(source, Network::Linkedin), "\u{2022} a\n\u{2022} b\n\ntail");
    }

    #[test]
    fn heading_is_bold_only_on_linkedin() {
        assert_eq!(render("# Hi", Network::Twitter), "Hi");
        assert_eq!(render("# Hi", Network::Linkedin), "\u{1d5db}\u{1d5f6}");
    }

    #[test]
    fn code_block_is_trimmed_and_separated() {
        let source = "```\nlet x = 1;\n```\n\nafter";
        assert_eq!(render(source, Network::Twitter), "let x = 1;\n\nafter");
    }

    #[test]
    fn thematic_break_renders_as_dashes() {
        let source = "before\n\n---\n\nafter";
        assert_eq!(render(source, Network::Twitter), "before\n\n---\n\nafter");
    }

    #[test]
    fn blockquote_lines_are_prefixed() {
        assert_eq!(render("> quoted text", Network::Twitter), "> quoted text");
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(render("", Network::Twitter), "");
        assert_eq!(render("   \n\n", Network::Linkedin), "");
    }

    #[test]
    fn soft_line_break_joins_with_space() {
        let rendered = render("first line\nsecond line", Network::Twitter);
        assert_eq!(rendered, "first line second line");
    }
}
