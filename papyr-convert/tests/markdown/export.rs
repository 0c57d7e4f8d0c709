//! Export tests for the markup → Markdown serializer

use papyr_convert::formats::markdown::serializer::markup_to_markdown;
use papyr_convert::{export, ExportFormat};

#[test]
fn document_with_every_supported_element() {
    let markup = "<h1>Report</h1>\
                  <p>Intro with <b>bold</b>, <i>italic</i> and <u>underline</u>.</p>\
                  <h2>Findings</h2>\
                  <ol><li>First</li><li>Second</li></ol>\
                  <ul><li>one</li><li>two</li></ul>";

    let markdown = markup_to_markdown(markup);

    assert_eq!(
        markdown,
        "# Report\n\n\
         Intro with **bold**, *italic* and __underline__.\n\n\
         ## Findings\n\n\
         1. First\n2. Second\n\n\
         - one\n- two"
    );
}

#[test]
fn ordered_items_are_renumbered_regardless_of_existing_numerals() {
    // Items carrying stale numbering in their text keep it as text; the
    // markers come from position alone.
    let markdown = markup_to_markdown("<ol><li>9. old</li><li>1. older</li></ol>");
    assert_eq!(markdown, "1. 9. old\n2. 1. older");
}

#[test]
fn editor_attributes_survive_conversion() {
    // The editor decorates lists with inline styles; conversion tolerates them.
    let markdown = markup_to_markdown(
        "<ol style=\"list-style-type: decimal\"><li>a</li></ol>\
         <ul style=\"list-style-type: disc\"><li>b</li></ul>",
    );
    assert_eq!(markdown, "1. a\n\n- b");
}

#[test]
fn md_export_uses_the_serializer() {
    let exported = export("<h1>T</h1><p>body</p>", "doc", ExportFormat::Markdown);
    assert_eq!(String::from_utf8(exported.bytes).unwrap(), "# T\n\nbody");
    assert_eq!(exported.file_name, "doc.md");
}

#[test]
fn unknown_markup_degrades_to_plain_text() {
    let markdown = markup_to_markdown("<table><tr><td>cell</td></tr></table>");
    assert_eq!(markdown, "cell");
}
