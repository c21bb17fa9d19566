//!
//! Block and inline document model for social rendering.
//!
//! pulldown-cmark hands us a flat event stream; this module folds it back
//! into the small tree the renderers walk. Only the constructs that matter
//! for plain-text output are kept as distinct variants. Anything else is
//! flattened into the surrounding text run, so malformed or exotic Markdown
//! degrades to its literal text instead of failing.

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};

/// A top-level structural unit of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Vec<Inline>),
    Paragraph(Vec<Inline>),
    /// One entry per list item, each already flattened to its inline run.
    /// Nested sub-lists and extra paragraphs collapse into the item's text.
    List(Vec<Vec<Inline>>),
    /// Raw code block content, verbatim including line breaks.
    CodeBlock(String),
    ThematicBreak,
    /// Blockquote content flattened across its inner paragraphs.
    Blockquote(Vec<Inline>),
}

/// A unit of text-level markup inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    /// Inline code span content, backticks stripped.
    Code(String),
    /// Emphasis and strong are not distinguished; both render unmarked.
    Emphasis(Vec<Inline>),
    Link { children: Vec<Inline>, dest: String },
    /// Bare autolink, kept as written in the source.
    AutoLink(String),
}

/// Parse a Markdown document into its block tree.
///
/// Never fails: any UTF-8 input (including the empty string) produces a
/// tree, with unrecognized constructs degrading to plain text.
pub fn parse(source: &str) -> Vec<Block> {
    let events: Vec<Event<'_>> = Parser::new_ext(source, Options::empty()).collect();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while pos < events.len() {
        match &events[pos] {
            Event::Start(Tag::Heading { .. }) => {
                let (inlines, next) = collect_inlines(&events, pos + 1);
                blocks.push(Block::Heading(inlines));
                pos = next;
            }
            Event::Start(Tag::Paragraph) => {
                let (inlines, next) = collect_inlines(&events, pos + 1);
                blocks.push(Block::Paragraph(inlines));
                pos = next;
            }
            Event::Start(Tag::List(_)) => {
                let (items, next) = collect_list_items(&events, pos + 1);
                blocks.push(Block::List(items));
                pos = next;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                let (code, next) = collect_code(&events, pos + 1);
                blocks.push(Block::CodeBlock(code));
                pos = next;
            }
            Event::Start(Tag::BlockQuote(_)) => {
                let (inlines, next) = collect_inlines(&events, pos + 1);
                blocks.push(Block::Blockquote(inlines));
                pos = next;
            }
            Event::Rule => {
                blocks.push(Block::ThematicBreak);
                pos += 1;
            }
            Event::Start(_) => {
                // Unknown block container (e.g. raw HTML): keep whatever
                // literal text it carries, drop the structure.
                let (inlines, next) = collect_inlines(&events, pos + 1);
                if !inlines.is_empty() {
                    blocks.push(Block::Paragraph(inlines));
                }
                pos = next;
            }
            _ => pos += 1,
        }
    }

    blocks
}

/// Collect inline content up to and including the `End` event that closes
/// the container opened just before `pos`.
fn collect_inlines(events: &[Event<'_>], mut pos: usize) -> (Vec<Inline>, usize) {
    let mut out = Vec::new();

    while pos < events.len() {
        match &events[pos] {
            Event::End(_) => return (out, pos + 1),
            Event::Text(text) => {
                out.push(Inline::Text(text.to_string()));
                pos += 1;
            }
            Event::Code(code) => {
                out.push(Inline::Code(code.to_string()));
                pos += 1;
            }
            // Soft line breaks keep the inline flow on one visual line.
            Event::SoftBreak => {
                out.push(Inline::Text(" ".to_string()));
                pos += 1;
            }
            Event::Start(Tag::Emphasis) | Event::Start(Tag::Strong) => {
                let (children, next) = collect_inlines(events, pos + 1);
                out.push(Inline::Emphasis(children));
                pos = next;
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                ..
            }) => {
                let bare = matches!(link_type, LinkType::Autolink | LinkType::Email);
                let dest = dest_url.to_string();
                let (children, next) = collect_inlines(events, pos + 1);
                if bare {
                    // The literal text is the URL exactly as written, without
                    // any mailto: prefix pulldown-cmark adds to the dest.
                    out.push(Inline::AutoLink(literal_text(&children)));
                } else {
                    out.push(Inline::Link { children, dest });
                }
                pos = next;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                // A code block nested under a list item contributes no
                // inline text.
                let (_, next) = collect_code(events, pos + 1);
                pos = next;
            }
            Event::Start(_) => {
                // Nested paragraphs, sub-lists, images and other containers
                // splice their text straight into the surrounding run.
                let (children, next) = collect_inlines(events, pos + 1);
                out.extend(children);
                pos = next;
            }
            // HardBreak, raw HTML and the rest contribute nothing.
            _ => pos += 1,
        }
    }

    (out, pos)
}

fn collect_list_items(events: &[Event<'_>], mut pos: usize) -> (Vec<Vec<Inline>>, usize) {
    let mut items = Vec::new();

    while pos < events.len() {
        match &events[pos] {
            Event::Start(Tag::Item) => {
                let (inlines, next) = collect_inlines(events, pos + 1);
                items.push(inlines);
                pos = next;
            }
            Event::End(_) => return (items, pos + 1),
            _ => pos += 1,
        }
    }

    (items, pos)
}

fn collect_code(events: &[Event<'_>], mut pos: usize) -> (String, usize) {
    let mut code = String::new();

    while pos < events.len() {
        match &events[pos] {
            Event::Text(text) => {
                code.push_str(text);
                pos += 1;
            }
            Event::End(_) => return (code, pos + 1),
            _ => pos += 1,
        }
    }

    (code, pos)
}

fn literal_text(inlines: &[Inline]) -> String {
    let mut buf = String::new();
    for inline in inlines {
        if let Inline::Text(text) = inline {
            buf.push_str(text);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_parses_to_empty_tree() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn heading_and_paragraph() {
        let blocks = parse("# Title\n\nBody text.");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Heading(_)));
        assert!(matches!(blocks[1], Block::Paragraph(_)));
    }

    #[test]
    fn setext_heading_recognized() {
        let blocks = parse("Title\n=====\n");
        assert!(matches!(blocks[0], Block::Heading(_)));
    }

    #[test]
    fn list_items_are_flattened() {
        let blocks = parse("- first\n- second\n");
        match &blocks[0] {
            Block::List(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], vec![Inline::Text("first".to_string())]);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn nested_list_text_collapses_into_parent_item() {
        let blocks = parse("- outer\n  - inner\n");
        match &blocks[0] {
            Block::List(items) => {
                assert_eq!(items.len(), 1);
                let text: String = items[0]
                    .iter()
                    .map(|i| match i {
                        Inline::Text(t) => t.as_str(),
                        _ => "",
                    })
                    .collect();
                assert!(text.contains("outer"));
                assert!(text.contains("inner"));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn fenced_code_block_keeps_raw_lines() {
        let blocks = parse("```\nlet x = 1;\nlet y = 2;\n```\n");
        match &blocks[0] {
            Block::CodeBlock(code) => assert_eq!(code, "let x = 1;\nlet y = 2;\n"),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn thematic_break_variants() {
        for source in ["---\n", "***\n", "___\n"] {
            let blocks = parse(source);
            assert_eq!(blocks, vec![Block::ThematicBreak], "source: {source:?}");
        }
    }

    #[test]
    fn blockquote_flattens_paragraphs() {
        let blocks = parse("> quoted line\n");
        assert!(matches!(blocks[0], Block::Blockquote(_)));
    }

    #[test]
    fn autolink_keeps_source_url() {
        let blocks = parse("see <https://example.test/page>\n");
        match &blocks[0] {
            Block::Paragraph(inlines) => {
                assert!(inlines.contains(&Inline::AutoLink("https://example.test/page".to_string())));
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn html_block_degrades_silently() {
        let blocks = parse("<div>\nraw\n</div>\n\nafter\n");
        // The HTML block carries no extractable text; the paragraph survives.
        assert!(blocks.iter().any(|b| matches!(b, Block::Paragraph(_))));
    }

    #[test]
    fn soft_break_becomes_space() {
        let blocks = parse("line one\nline two\n");
        match &blocks[0] {
            Block::Paragraph(inlines) => {
                assert!(inlines.contains(&Inline::Text(" ".to_string())));
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }
}
