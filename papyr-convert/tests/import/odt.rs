//! Import tests for ODT containers

use crate::common::{degraded_session, full_session, odt_bytes, odt_bytes_without_content};
use papyr_convert::error::ConvertError;
use papyr_convert::ImportWarning;

#[test]
fn paragraph_texts_are_extracted_in_order() {
    let session = full_session();
    let bytes = odt_bytes(&["First paragraph", "Second paragraph"]);
    let result = session.import(&bytes, "letter.odt").unwrap();

    assert_eq!(
        result.content,
        "<p>First paragraph</p><p>Second paragraph</p>"
    );
    assert_eq!(result.title, "letter");
    assert!(result.warnings.is_empty());
}

#[test]
fn empty_paragraphs_are_filtered_before_joining() {
    let session = full_session();
    let bytes = odt_bytes(&["A", "", "B"]);
    let result = session.import(&bytes, "doc.odt").unwrap();

    assert_eq!(result.content, "<p>A</p><p>B</p>");
}

#[test]
fn missing_content_entry_yields_the_odt_placeholder() {
    let session = full_session();
    let result = session
        .import(&odt_bytes_without_content(), "odd.odt")
        .unwrap();
    assert_eq!(result.content, "<p>Unable to extract ODT content.</p>");
}

#[test]
fn content_with_no_paragraphs_yields_the_empty_placeholder() {
    let session = full_session();
    let result = session.import(&odt_bytes(&[]), "blank.odt").unwrap();
    assert_eq!(
        result.content,
        "<p>Empty or unreadable file content.</p>"
    );
}

#[test]
fn damaged_container_aborts_this_import_only() {
    let session = full_session();
    let err = session.import(b"not a zip", "broken.odt").unwrap_err();
    assert!(matches!(err, ConvertError::ImportFailed { .. }));

    // The session is unaffected; the next import succeeds.
    let result = session.import(b"fine", "next.txt").unwrap();
    assert_eq!(result.content, "<p>fine</p>");
}

#[test]
fn without_archive_reader_falls_back_to_raw_text_with_warning() {
    let session = degraded_session();
    let result = session.import(b"readable\x02bytes", "doc.odt").unwrap();

    assert_eq!(result.content, "<p>readablebytes</p>");
    assert_eq!(
        result.warnings,
        vec![ImportWarning::ReducedFidelity {
            format: "odt".to_string(),
            capability: "archive-reader".to_string(),
        }]
    );
}
