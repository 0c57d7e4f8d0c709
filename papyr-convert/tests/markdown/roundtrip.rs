//! Round-trip tests: markup → Markdown → markup via the fallback converter
//!
//! Round-tripping is deliberately not lossless (see the format docs), but
//! for documents built from headings, bold, italic and paragraphs the
//! structure and text content must survive.

use papyr_convert::formats::markdown::parser::markdown_to_markup;
use papyr_convert::formats::markdown::serializer::markup_to_markdown;
use regex::Regex;

fn text_content(markup: &str) -> String {
    Regex::new(r"<[^>]+>").unwrap().replace_all(markup, "").into_owned()
}

#[test]
fn headings_bold_italic_and_paragraphs_survive() {
    let original = "<h1>Title</h1>\
                    <p>Some <b>bold</b> and <i>italic</i> text.</p>\
                    <p>Second paragraph.</p>";

    let markdown = markup_to_markdown(original);
    let recovered = markdown_to_markup(&markdown);

    assert!(recovered.contains("<h1>Title</h1>"));
    assert!(recovered.contains("<b>bold</b>"));
    assert!(recovered.contains("<i>italic</i>"));
    assert_eq!(text_content(&recovered), text_content(original));
}

#[test]
fn all_heading_levels_round_trip() {
    let original = "<h1>a</h1><h2>b</h2><h3>c</h3><h4>d</h4>";
    let recovered = markdown_to_markup(&markup_to_markdown(original));
    for tag in ["<h1>a</h1>", "<h2>b</h2>", "<h3>c</h3>", "<h4>d</h4>"] {
        assert!(recovered.contains(tag), "missing {tag} in {recovered}");
    }
}

#[test]
fn fallback_conversion_is_idempotent_on_its_own_output() {
    let sources = [
        "# Title\n\n**bold** *italic* __under__\n- item\n1. numbered",
        "plain text\nwith lines",
        "#### deep heading",
    ];
    for source in sources {
        let once = markdown_to_markup(source);
        let twice = markdown_to_markup(&once);
        assert_eq!(once, twice, "not a fixed point for {source:?}");
    }
}
