//! Shared fixtures for the conversion tests: sessions with controlled
//! capability availability, and in-memory ODT/DOCX containers.

use papyr_convert::capability::{
    Capability, CapabilityHandle, CapabilityKind, CapabilitySource,
};
use papyr_convert::error::ConvertError;
use papyr_convert::ConvertSession;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A session where every capability loaded.
pub fn full_session() -> ConvertSession {
    ConvertSession::start()
}

struct FailingSource {
    name: &'static str,
}

impl CapabilitySource for FailingSource {
    fn name(&self) -> &str {
        self.name
    }
    fn load(&self) -> Result<CapabilityHandle, ConvertError> {
        Err(ConvertError::CapabilityLoad(format!(
            "{}: connection refused",
            self.name
        )))
    }
}

/// A session where all three capabilities were attempted and every source
/// chain was exhausted — the "everything failed to load" scenario.
pub fn degraded_session() -> ConvertSession {
    ConvertSession::with_capabilities(vec![
        Capability::new(
            CapabilityKind::MarkdownRenderer,
            vec![
                Box::new(FailingSource { name: "primary" }),
                Box::new(FailingSource { name: "mirror" }),
            ],
        ),
        Capability::new(
            CapabilityKind::DocxConverter,
            vec![Box::new(FailingSource { name: "primary" })],
        ),
        Capability::new(
            CapabilityKind::ArchiveReader,
            vec![Box::new(FailingSource { name: "primary" })],
        ),
    ])
}

fn zip_with_entry(name: &str, contents: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(name, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(contents.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// An ODT container whose `content.xml` holds the given paragraph texts.
pub fn odt_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<text:p>{p}</text:p>"))
        .collect();
    let xml = format!(
        "<office:document-content \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\">\
         <office:body><office:text>{body}</office:text></office:body>\
         </office:document-content>"
    );
    zip_with_entry("content.xml", &xml)
}

/// An ODT-shaped container with no `content.xml` entry.
pub fn odt_bytes_without_content() -> Vec<u8> {
    zip_with_entry("styles.xml", "<office:document-styles/>")
}

/// A DOCX container whose `word/document.xml` holds the given body XML.
pub fn docx_bytes(body: &str) -> Vec<u8> {
    let xml = format!(
        "<w:document \
         xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );
    zip_with_entry("word/document.xml", &xml)
}
