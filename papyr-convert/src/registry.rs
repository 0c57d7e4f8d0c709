//! Import format registry for discovery and extension dispatch
//!
//! This module provides a centralized registry for all import formats.
//! Formats can be registered, retrieved by name, and detected from a file
//! name's extension.

use crate::error::ConvertError;
use crate::format::ImportFormat;
use std::collections::HashMap;

/// Registry of import formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = ImportRegistry::new();
/// registry.register(MyFormat);
///
/// let format = registry.detect("notes.md").unwrap();
/// let imported = format.import(bytes, &session)?;
/// ```
pub struct ImportRegistry {
    formats: HashMap<String, Box<dyn ImportFormat>>,
}

impl ImportRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ImportRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: ImportFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn ImportFormat, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::ParseError(format!("No import format named '{name}'")))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all registered format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a format from a file name's extension.
    ///
    /// The extension is everything after the last dot, lowercased. A name
    /// without a dot is treated as its own extension, which matches nothing
    /// in practice and routes the file to the unparseable placeholder.
    pub fn detect(&self, file_name: &str) -> Option<&dyn ImportFormat> {
        let extension = extension_of(file_name);
        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|f| f.as_ref())
    }

    /// Create a registry with the default import formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownImport);
        registry.register(crate::formats::text::TextImport);
        registry.register(crate::formats::docx::DocxImport);
        registry.register(crate::formats::odt::OdtImport);
        registry.register(crate::formats::text::RawTextImport::doc());
        registry.register(crate::formats::text::RawTextImport::pdf());

        registry
    }
}

impl Default for ImportRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Last dot-separated token of the file name, lowercased.
pub(crate) fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}
