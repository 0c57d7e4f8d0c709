//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during import/export operations
///
/// The low-level text transducers never produce these: they substitute a
/// placeholder paragraph instead, so callers always receive some markup.
/// Errors surface from the import/export entry points, where one failed
/// operation must not take down the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A capability source failed to initialize
    CapabilityLoad(String),
    /// A ZIP container could not be opened or read
    ArchiveError(String),
    /// An XML payload could not be parsed
    XmlError(String),
    /// Error while parsing an input document
    ParseError(String),
    /// Import of one file failed; wraps the underlying cause with the file name
    ImportFailed { file: String, reason: String },
    /// Requested export format is not in the format table
    UnsupportedExportFormat(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::CapabilityLoad(msg) => write!(f, "Failed to load {msg}"),
            ConvertError::ArchiveError(msg) => write!(f, "Archive error: {msg}"),
            ConvertError::XmlError(msg) => write!(f, "XML error: {msg}"),
            ConvertError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::ImportFailed { file, reason } => {
                write!(f, "Error processing {file}: {reason}")
            }
            ConvertError::UnsupportedExportFormat(name) => {
                write!(f, "Unsupported format: {name}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
