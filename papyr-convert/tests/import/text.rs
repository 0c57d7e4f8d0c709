//! Import tests for plain text files

use crate::common::{degraded_session, full_session};
use papyr_convert::title_from_file_name;

#[test]
fn newlines_become_paragraph_boundaries() {
    let session = full_session();
    let result = session.import(b"first\nsecond\nthird", "notes.txt").unwrap();
    assert_eq!(
        result.content,
        "<p>first</p><p>second</p><p>third</p>"
    );
}

#[test]
fn text_import_works_without_any_capabilities() {
    let session = degraded_session();
    let result = session.import(b"still works", "notes.txt").unwrap();
    assert_eq!(result.content, "<p>still works</p>");
    assert!(result.warnings.is_empty());
}

#[test]
fn blank_lines_are_dropped_as_empty_paragraphs() {
    let session = full_session();
    let result = session.import(b"a\n\nb", "gap.txt").unwrap();
    // The empty middle paragraph is removed by post-processing.
    assert_eq!(result.content, "<p>a</p><p>b</p>");
}

#[test]
fn title_comes_from_the_file_name() {
    let session = full_session();
    let result = session.import(b"body", "meeting notes.txt").unwrap();
    assert_eq!(result.title, "meeting notes");

    // Only the first dot-separated token survives.
    assert_eq!(title_from_file_name("report.v2.docx"), "report");
}

#[test]
fn empty_file_yields_the_placeholder() {
    let session = full_session();
    let result = session.import(b"", "empty.txt").unwrap();
    assert_eq!(
        result.content,
        "<p>Empty or unreadable file content.</p>"
    );
}
