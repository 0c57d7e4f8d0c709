//! File import: detection, dispatch and post-processing
//!
//! `import_file` is the single entry point the shell calls when the user
//! opens a file. It detects the format from the extension, runs the
//! format's import under the session's capabilities, and applies the
//! uniform post-processing: empty paragraph markers are stripped, and a
//! file that ends up with no content at all gets a literal placeholder so
//! callers never see an empty document.
//!
//! Hard failures are wrapped with the file name ([`ConvertError::ImportFailed`])
//! and abort only this file's import; the session stays usable.

use crate::error::ConvertError;
use crate::format::{ImportWarning, Imported};
use crate::markup::{strip_empty_paragraphs, EMPTY_PLACEHOLDER, UNPARSED_PLACEHOLDER};
use crate::registry::ImportRegistry;
use crate::session::ConvertSession;

/// Result of importing one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    /// Editor markup. Never empty, never contains `<p></p>` markers.
    pub content: String,
    /// Title derived from the file name.
    pub title: String,
    /// Fidelity warnings for the presentation layer.
    pub warnings: Vec<ImportWarning>,
}

/// Derive the document title from a file name.
///
/// Everything from the first dot on is dropped: `"report.v2.docx"` titles
/// as `"report"`. Deliberately not "strip the last extension" — this is the
/// established behavior documents were saved with.
pub fn title_from_file_name(file_name: &str) -> String {
    file_name.split('.').next().unwrap_or("").to_string()
}

/// Import a file with the default format registry.
pub fn import_file(
    bytes: &[u8],
    file_name: &str,
    session: &ConvertSession,
) -> Result<ImportResult, ConvertError> {
    import_with_registry(&ImportRegistry::with_defaults(), bytes, file_name, session)
}

/// Import a file, dispatching through an explicit registry.
pub fn import_with_registry(
    registry: &ImportRegistry,
    bytes: &[u8],
    file_name: &str,
    session: &ConvertSession,
) -> Result<ImportResult, ConvertError> {
    let title = title_from_file_name(file_name);

    let imported = match registry.detect(file_name) {
        Some(format) => {
            log::debug!("importing '{file_name}' as {}", format.name());
            format
                .import(bytes, session)
                .map_err(|err| ConvertError::ImportFailed {
                    file: file_name.to_string(),
                    reason: err.to_string(),
                })?
        }
        None => {
            log::debug!("no import format claims '{file_name}'");
            Imported::from_markup(UNPARSED_PLACEHOLDER)
        }
    };

    let mut content = strip_empty_paragraphs(&imported.markup);
    if content.is_empty() {
        content = EMPTY_PLACEHOLDER.to_string();
    }

    Ok(ImportResult {
        content,
        title,
        warnings: imported.warnings,
    })
}
