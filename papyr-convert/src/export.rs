//! Document export
//!
//! The export side is a fixed table: each format maps to a MIME type and a
//! file extension, and the bytes are the markup as-is except for Markdown
//! (serialized through the markup → Markdown reducer). PDF is a documented
//! degradation, not a bug: no real PDF is produced, the markup text ships
//! as `text/plain` with a `.txt` extension.

use crate::error::ConvertError;
use crate::formats::markdown::serializer::markup_to_markdown;

/// Export formats offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Doc,
    Pdf,
    Odt,
    Markdown,
}

impl ExportFormat {
    /// Every format, in menu order.
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Docx,
        ExportFormat::Doc,
        ExportFormat::Pdf,
        ExportFormat::Odt,
        ExportFormat::Markdown,
    ];

    /// Parse a user-supplied format name. Unknown names fail; there is no
    /// default.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        match name.to_ascii_lowercase().as_str() {
            "docx" => Ok(ExportFormat::Docx),
            "doc" => Ok(ExportFormat::Doc),
            "pdf" => Ok(ExportFormat::Pdf),
            "odt" => Ok(ExportFormat::Odt),
            "md" => Ok(ExportFormat::Markdown),
            other => Err(ConvertError::UnsupportedExportFormat(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Doc => "doc",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Odt => "odt",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Doc => "application/msword",
            // No native PDF generation; plain text is the honest fallback.
            ExportFormat::Pdf => "text/plain",
            ExportFormat::Odt => "application/vnd.oasis.opendocument.text",
            ExportFormat::Markdown => "text/markdown",
        }
    }

    /// Extension for the downloaded file, without the dot. PDF ships `.txt`
    /// to match its plain-text content.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Doc => "doc",
            ExportFormat::Pdf => "txt",
            ExportFormat::Odt => "odt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// A downloadable export: bytes plus the metadata the shell needs to hand
/// the file to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub file_name: String,
}

/// Export markup under a title to the given format.
pub fn export(markup: &str, title: &str, format: ExportFormat) -> ExportedDocument {
    let output = match format {
        ExportFormat::Markdown => markup_to_markdown(markup),
        _ => markup.to_string(),
    };
    ExportedDocument {
        bytes: output.into_bytes(),
        mime_type: format.mime_type(),
        file_name: format!("{title}.{}", format.file_extension()),
    }
}

/// Export with a format given by name; fails on names outside the table.
pub fn export_named(
    markup: &str,
    title: &str,
    format_name: &str,
) -> Result<ExportedDocument, ConvertError> {
    Ok(export(markup, title, ExportFormat::from_name(format_name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_degrades_to_plain_text() {
        let exported = export("<p>hello</p>", "Doc", ExportFormat::Pdf);
        assert_eq!(exported.mime_type, "text/plain");
        assert_eq!(exported.file_name, "Doc.txt");
        assert_eq!(exported.bytes, b"<p>hello</p>");
    }

    #[test]
    fn markdown_export_serializes_the_markup() {
        let exported = export("<h1>T</h1><p>body</p>", "notes", ExportFormat::Markdown);
        assert_eq!(exported.mime_type, "text/markdown");
        assert_eq!(exported.file_name, "notes.md");
        assert_eq!(String::from_utf8(exported.bytes).unwrap(), "# T\n\nbody");
    }

    #[test]
    fn docx_and_odt_keep_markup_bytes_with_their_mime_types() {
        let docx = export("<p>x</p>", "t", ExportFormat::Docx);
        assert_eq!(
            docx.mime_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(docx.file_name, "t.docx");

        let odt = export("<p>x</p>", "t", ExportFormat::Odt);
        assert_eq!(odt.mime_type, "application/vnd.oasis.opendocument.text");
        assert_eq!(odt.file_name, "t.odt");
    }

    #[test]
    fn unknown_format_names_fail() {
        let err = export_named("<p>x</p>", "t", "rtf").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedExportFormat("rtf".to_string())
        );
    }

    #[test]
    fn format_names_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_name(format.name()).unwrap(), format);
        }
    }
}
