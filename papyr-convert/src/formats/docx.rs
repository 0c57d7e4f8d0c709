//! DOCX import
//!
//! Primary path: the session's DOCX converter capability. Without it, the
//! bytes are shown as sanitized raw text with a fidelity warning — ugly,
//! but the user still gets their content.

use crate::error::ConvertError;
use crate::format::{ImportFormat, Imported, ImportWarning};
use crate::markup::{sanitized_paragraphs, DOCX_PLACEHOLDER};
use crate::session::ConvertSession;

/// Import format for DOCX containers.
pub struct DocxImport;

impl ImportFormat for DocxImport {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word documents via the DOCX converter capability"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn import(&self, bytes: &[u8], session: &ConvertSession) -> Result<Imported, ConvertError> {
        if let Some(converter) = session.capabilities().docx_converter() {
            // Converter failures propagate: the caller aborts this one file.
            let markup = converter.convert(bytes)?;
            if markup.is_empty() {
                return Ok(Imported::from_markup(DOCX_PLACEHOLDER));
            }
            return Ok(Imported::from_markup(markup));
        }

        log::warn!("docx-converter unavailable, importing DOCX as raw text");
        let text = String::from_utf8_lossy(bytes);
        Ok(Imported::with_warning(
            sanitized_paragraphs(&text),
            ImportWarning::ReducedFidelity {
                format: "docx".to_string(),
                capability: "docx-converter".to_string(),
            },
        ))
    }
}
