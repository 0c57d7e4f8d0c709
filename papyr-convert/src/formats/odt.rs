//! ODT import
//!
//! An ODT file is a ZIP container; the document body lives in the
//! `content.xml` entry as `<text:p>` elements. Primary path: the session's
//! archive reader capability plus roxmltree over that one entry. Paragraphs
//! that are empty after trimming are dropped before joining, so an ODT with
//! paragraphs "A", "", "B" imports as exactly two paragraphs.
//!
//! Failures inside the primary path (damaged container, malformed XML)
//! propagate — they abort this file's import rather than falling back.

use crate::error::ConvertError;
use crate::format::{ImportFormat, Imported, ImportWarning};
use crate::markup::{sanitized_paragraphs, ODT_PLACEHOLDER};
use crate::session::ConvertSession;
use roxmltree::Node;

const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";

/// Import format for OpenDocument text.
pub struct OdtImport;

impl ImportFormat for OdtImport {
    fn name(&self) -> &str {
        "odt"
    }

    fn description(&self) -> &str {
        "OpenDocument text via the archive reader capability"
    }

    fn file_extensions(&self) -> &[&str] {
        &["odt"]
    }

    fn import(&self, bytes: &[u8], session: &ConvertSession) -> Result<Imported, ConvertError> {
        if let Some(reader) = session.capabilities().archive_reader() {
            return match reader.read_entry(bytes, "content.xml")? {
                Some(xml) => Ok(Imported::from_markup(extract_paragraphs(&xml)?)),
                None => Ok(Imported::from_markup(ODT_PLACEHOLDER)),
            };
        }

        log::warn!("archive-reader unavailable, importing ODT as raw text");
        let text = String::from_utf8_lossy(bytes);
        Ok(Imported::with_warning(
            sanitized_paragraphs(&text),
            ImportWarning::ReducedFidelity {
                format: "odt".to_string(),
                capability: "archive-reader".to_string(),
            },
        ))
    }
}

fn extract_paragraphs(xml: &str) -> Result<String, ConvertError> {
    let doc =
        roxmltree::Document::parse(xml).map_err(|e| ConvertError::XmlError(e.to_string()))?;

    let paragraphs: Vec<String> = doc
        .descendants()
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == "p"
                && n.tag_name().namespace() == Some(TEXT_NS)
        })
        .map(element_text)
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(format!("<p>{}</p>", paragraphs.join("</p><p>")))
}

/// All descendant text of an element, concatenated (spans included).
fn element_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
