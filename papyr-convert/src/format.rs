//! Import format trait definition
//!
//! This module defines the core ImportFormat trait that all import paths
//! implement. Each format owns its extension claims, its primary
//! (capability-backed) path and its fallback path; the registry only
//! dispatches.

use crate::error::ConvertError;
use crate::session::ConvertSession;
use std::fmt;

/// A reduced-fidelity notice produced during import.
///
/// Warnings are data, not side effects: the core never alerts or prints.
/// The presentation layer decides whether they become a dialog, a log line
/// or a status bar message.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportWarning {
    /// The preferred converter capability is not loaded; raw text was shown
    /// instead.
    ReducedFidelity { format: String, capability: String },
    /// The format has no real parser at all; raw text was shown.
    NotFullySupported { format: String },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::ReducedFidelity { format, capability } => write!(
                f,
                "{} parsing requires the {} capability, which is not loaded. Displaying raw text.",
                format.to_uppercase(),
                capability
            ),
            ImportWarning::NotFullySupported { format } => write!(
                f,
                "{} files are not fully supported. Displaying raw text.",
                format.to_uppercase()
            ),
        }
    }
}

/// Markup produced by one format's import, plus any fidelity warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    pub markup: String,
    pub warnings: Vec<ImportWarning>,
}

impl Imported {
    /// A clean import with no warnings.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Imported {
            markup: markup.into(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(markup: impl Into<String>, warning: ImportWarning) -> Self {
        Imported {
            markup: markup.into(),
            warnings: vec![warning],
        }
    }
}

/// Trait for import formats
///
/// Implementors convert raw file bytes into the editor markup subset,
/// choosing the richest path the session's capabilities allow. Failures are
/// returned, not swallowed; the import entry point wraps them with the file
/// name so the caller can tell the user which file broke.
pub trait ImportFormat: Send + Sync {
    /// The name of this format (e.g., "markdown", "docx")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions claimed by this format, without the leading dot.
    fn file_extensions(&self) -> &[&str];

    /// Convert file bytes to markup under the given session.
    fn import(&self, bytes: &[u8], session: &ConvertSession) -> Result<Imported, ConvertError>;
}
