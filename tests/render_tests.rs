use mdcast::markdown::{Network, compose, render};
use pretty_assertions::assert_eq;

#[test]
fn title_and_paragraphs_render_for_twitter() {
    let source = "# Title\n\nPara one.\n\nPara two.";
    assert_eq!(
        render(source, Network::Twitter),
        "Title\n\nPara one.\n\nPara two."
    );
}

#[test]
fn short_document_composes_to_a_single_chunk() {
    let source = "# Title\n\nPara one.\n\nPara two.";
    let chunks = compose(source, Network::Twitter);
    assert_eq!(chunks, vec!["Title\n\nPara one.\n\nPara two.".to_string()]);
}

#[test]
fn linkedin_heading_is_transliterated() {
    let source = "# Launch Day\n\nWe shipped.";
    let rendered = render(source, Network::Linkedin);
    assert!(rendered.starts_with("\u{1d5df}\u{1d5ee}\u{1d602}\u{1d5fb}\u{1d5f0}\u{1d5f5}"));
    assert!(rendered.ends_with("We shipped."));
}

#[test]
fn mixed_document_renders_every_block_kind() {
    let source = "\
# Heading

Intro paragraph with a [link](https://example.test).

- first
- second

```
code line
```

> a quote

---

Closing.
";
    let rendered = render(source, Network::Twitter);
    assert_eq!(
        rendered,
        "Heading\n\n\
         Intro paragraph with a link (https://example.test).\n\n\
         - first\n- second\n\n\
         code line\n\n\
         > a quote\n\n\
         ---\n\n\
         Closing."
    );
}

#[test]
fn linkedin_uses_bullet_glyphs() {
    let source = "- a\n- b\n\ntail";
    assert_eq!(
        render(source, Network::Linkedin),
        "\u{2022} a\n\u{2022} b\n\ntail"
    );
}

#[test]
fn autolink_is_rendered_verbatim() {
    let source = "docs at <https://docs.example.test/guide>";
    assert_eq!(
        render(source, Network::Twitter),
        "docs at https://docs.example.test/guide"
    );
}

#[test]
fn emphasis_inside_links_flattens() {
    let source = "[*styled* text](https://x.test)";
    assert_eq!(render(source, Network::Twitter), "styled text (https://x.test)");
}

#[test]
fn unrecognized_html_degrades_without_error() {
    let source = "<section>\n</section>\n\nplain paragraph";
    assert_eq!(render(source, Network::Twitter), "plain paragraph");
}

#[test]
fn empty_document_renders_to_empty_string() {
    assert_eq!(render("", Network::Twitter), "");
    assert_eq!(render("", Network::Linkedin), "");
}

#[test]
fn rendering_is_deterministic() {
    let source = "# A\n\nSome *text* here.\n\n- x\n- y";
    let first = render(source, Network::Twitter);
    let second = render(source, Network::Twitter);
    assert_eq!(first, second);
}
