//! Plain-text import paths
//!
//! `TextImport` handles `.txt` files: every newline becomes a paragraph
//! boundary, nothing else is touched. `RawTextImport` is the
//! reduced-fidelity path for formats nothing can really parse (`.doc`,
//! `.pdf`): the bytes are read as text, non-printable characters stripped,
//! and a warning attached.

use crate::error::ConvertError;
use crate::format::{ImportFormat, Imported, ImportWarning};
use crate::markup::{paragraphs_from_text, sanitized_paragraphs};
use crate::session::ConvertSession;

/// Import format for plain text files.
pub struct TextImport;

impl ImportFormat for TextImport {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, one paragraph per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn import(&self, bytes: &[u8], _session: &ConvertSession) -> Result<Imported, ConvertError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(Imported::from_markup(paragraphs_from_text(&text)))
    }
}

/// Raw-text import for formats with no parser at all.
///
/// One instance per claimed extension so the warning can name the format.
pub struct RawTextImport {
    extension: &'static str,
}

impl RawTextImport {
    pub fn doc() -> Self {
        RawTextImport { extension: "doc" }
    }

    pub fn pdf() -> Self {
        RawTextImport { extension: "pdf" }
    }
}

impl ImportFormat for RawTextImport {
    fn name(&self) -> &str {
        self.extension
    }

    fn description(&self) -> &str {
        "Raw text extraction for unsupported binary formats"
    }

    fn file_extensions(&self) -> &[&str] {
        std::slice::from_ref(&self.extension)
    }

    fn import(&self, bytes: &[u8], _session: &ConvertSession) -> Result<Imported, ConvertError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(Imported::with_warning(
            sanitized_paragraphs(&text),
            ImportWarning::NotFullySupported {
                format: self.extension.to_string(),
            },
        ))
    }
}
