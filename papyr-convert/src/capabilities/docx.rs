//! Best-effort DOCX converter over the ZIP + XML container
//!
//! A DOCX file is a ZIP container whose main part, `word/document.xml`,
//! holds the body as `w:p` paragraphs of `w:r` runs. This converter reads
//! that one part and emits the editor markup subset: paragraphs, with
//! bold/italic/underline recovered from run properties. Styles, tables,
//! images, numbering and everything else are out of scope for this
//! converter; it exists so DOCX import works without shelling out to a
//! full word processor.

use crate::capability::{CapabilityHandle, CapabilitySource, DocxConverter};
use crate::error::ConvertError;
use roxmltree::Node;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Source that provides the container-based DOCX converter.
pub struct OoxmlZipSource;

impl CapabilitySource for OoxmlZipSource {
    fn name(&self) -> &str {
        "ooxml-zip"
    }

    fn load(&self) -> Result<CapabilityHandle, ConvertError> {
        Ok(CapabilityHandle::DocxConverter(Box::new(OoxmlExtractor)))
    }
}

/// DOCX converter extracting paragraph text and basic run formatting.
pub struct OoxmlExtractor;

impl DocxConverter for OoxmlExtractor {
    fn convert(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        let xml = read_document_part(bytes)?;
        let doc = roxmltree::Document::parse(&xml)
            .map_err(|e| ConvertError::XmlError(e.to_string()))?;

        let paragraphs: Vec<String> = doc
            .descendants()
            .filter(|n| is_word_element(n, "p"))
            .map(paragraph_markup)
            .filter(|p| !p.trim().is_empty())
            .collect();

        if paragraphs.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("<p>{}</p>", paragraphs.join("</p><p>")))
    }
}

fn read_document_part(bytes: &[u8]) -> Result<String, ConvertError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ConvertError::ArchiveError(e.to_string()))?;
    let mut part = archive
        .by_name("word/document.xml")
        .map_err(|e| ConvertError::ArchiveError(e.to_string()))?;
    let mut buffer = Vec::new();
    part.read_to_end(&mut buffer)
        .map_err(|e| ConvertError::ArchiveError(e.to_string()))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn is_word_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(W_NS)
}

fn paragraph_markup(paragraph: Node) -> String {
    let mut markup = String::new();
    for run in paragraph
        .descendants()
        .filter(|n| is_word_element(n, "r"))
    {
        let text: String = run
            .descendants()
            .filter(|n| is_word_element(n, "t"))
            .filter_map(|t| t.text())
            .collect();
        if text.is_empty() {
            continue;
        }
        markup.push_str(&run_markup(run, &escape_text(&text)));
    }
    markup
}

fn run_markup(run: Node, text: &str) -> String {
    let properties = run.children().find(|n| is_word_element(n, "rPr"));
    let mut markup = text.to_string();
    if let Some(props) = properties {
        if toggle_on(&props, "u") {
            markup = format!("<u>{markup}</u>");
        }
        if toggle_on(&props, "i") {
            markup = format!("<i>{markup}</i>");
        }
        if toggle_on(&props, "b") {
            markup = format!("<b>{markup}</b>");
        }
    }
    markup
}

/// A run property element toggles its format on unless its `w:val` says
/// otherwise ("false"/"0" for b and i, "none" for u).
fn toggle_on(properties: &Node, name: &str) -> bool {
    match properties.children().find(|n| is_word_element(n, name)) {
        Some(prop) => !matches!(prop.attribute((W_NS, "val")), Some("false") | Some("0") | Some("none")),
        None => false,
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
