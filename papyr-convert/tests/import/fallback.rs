//! Degradation tests: the importer keeps working when capabilities are gone

use crate::common::degraded_session;
use papyr_convert::capability::CapabilityKind;
use papyr_convert::ImportWarning;

#[test]
fn degraded_session_reports_every_capability_as_failed() {
    let session = degraded_session();
    let report = session.load_report();

    assert_eq!(report.failed().len(), 3);
    for kind in [
        CapabilityKind::MarkdownRenderer,
        CapabilityKind::DocxConverter,
        CapabilityKind::ArchiveReader,
    ] {
        assert!(!report.is_available(kind));
        assert!(!session.capabilities().is_available(kind));
    }

    let summary = report.summary();
    assert!(summary.starts_with("Some libraries failed to load"));
    assert!(summary.ends_with("Basic file support for .txt and .md is available."));
}

#[test]
fn every_supported_extension_still_imports() {
    let session = degraded_session();

    for name in [
        "a.md", "a.txt", "a.docx", "a.odt", "a.doc", "a.pdf", "a.unknown",
    ] {
        let result = session.import(b"some content", name).unwrap();
        assert!(!result.content.is_empty(), "empty content for {name}");
    }
}

#[test]
fn doc_and_pdf_always_warn_about_partial_support() {
    let session = degraded_session();

    let doc = session.import(b"legacy\x01doc", "old.doc").unwrap();
    assert_eq!(doc.content, "<p>legacydoc</p>");
    assert_eq!(
        doc.warnings,
        vec![ImportWarning::NotFullySupported {
            format: "doc".to_string()
        }]
    );

    let pdf = session.import(b"%PDF-1.7 body", "print.pdf").unwrap();
    assert_eq!(
        pdf.warnings,
        vec![ImportWarning::NotFullySupported {
            format: "pdf".to_string()
        }]
    );
}

#[test]
fn warning_messages_are_presentable() {
    let warning = ImportWarning::ReducedFidelity {
        format: "docx".to_string(),
        capability: "docx-converter".to_string(),
    };
    assert!(warning.to_string().contains("Displaying raw text."));
}
