//! Import tests for Markdown files (renderer capability and fallback)

use crate::common::{degraded_session, full_session};

#[test]
fn renderer_path_produces_rich_html() {
    let session = full_session();
    let result = session
        .import(b"# Title\n\nSome **bold** text.\n", "notes.md")
        .unwrap();

    assert!(result.content.contains("<h1>Title</h1>"));
    assert!(result.content.contains("<strong>bold</strong>"));
    assert_eq!(result.title, "notes");
    assert!(result.warnings.is_empty());
}

#[test]
fn fallback_path_converts_the_supported_subset() {
    let session = degraded_session();
    let result = session
        .import(b"## Heading\n**bold** and *italic* and __under__", "notes.md")
        .unwrap();

    assert!(result.content.contains("<h2>Heading</h2>"));
    assert!(result.content.contains("<b>bold</b>"));
    assert!(result.content.contains("<i>italic</i>"));
    assert!(result.content.contains("<u>under</u>"));
}

#[test]
fn fallback_wraps_each_list_line_individually() {
    let session = degraded_session();
    let result = session.import(b"- a\n- b", "list.md").unwrap();

    assert_eq!(
        result.content,
        "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
    );
}

#[test]
fn markdown_import_never_fails_without_capabilities() {
    let session = degraded_session();
    for source in ["", "# h", "***", "__", "1. x\n\n\n2. y"] {
        let result = session.import(source.as_bytes(), "any.md").unwrap();
        assert!(!result.content.is_empty());
    }
}
