//! Import tests for DOCX containers

use crate::common::{degraded_session, docx_bytes, full_session};
use papyr_convert::ImportWarning;

#[test]
fn paragraphs_and_run_formatting_are_extracted() {
    let session = full_session();
    let bytes = docx_bytes(
        "<w:p><w:r><w:t>Hello </w:t></w:r>\
         <w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r></w:p>\
         <w:p><w:r><w:rPr><w:i/></w:rPr><w:t>second</w:t></w:r></w:p>",
    );
    let result = session.import(&bytes, "memo.docx").unwrap();

    assert_eq!(
        result.content,
        "<p>Hello <b>world</b></p><p><i>second</i></p>"
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn body_without_text_yields_the_docx_placeholder() {
    let session = full_session();
    let result = session.import(&docx_bytes(""), "hollow.docx").unwrap();
    assert_eq!(result.content, "<p>Unable to extract DOCX content.</p>");
}

#[test]
fn without_converter_falls_back_to_raw_text_with_warning() {
    let session = degraded_session();
    let result = session
        .import(b"PK\x03\x04visible text", "memo.docx")
        .unwrap();

    assert_eq!(result.content, "<p>PKvisible text</p>");
    assert_eq!(
        result.warnings,
        vec![ImportWarning::ReducedFidelity {
            format: "docx".to_string(),
            capability: "docx-converter".to_string(),
        }]
    );
}
