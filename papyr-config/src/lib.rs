//! Shared configuration loader for the papyr toolchain.
//!
//! `defaults/papyr.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`PapyrConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use papyr_convert::capabilities::capabilities_from_sources;
use papyr_convert::capability::Capability;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/papyr.default.toml");

/// Top-level configuration consumed by papyr applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PapyrConfig {
    pub capabilities: CapabilitiesConfig,
    pub export: ExportConfig,
    pub editor: EditorConfig,
}

/// Capability source chains, in priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct CapabilitiesConfig {
    pub markdown: Vec<String>,
    pub docx: Vec<String>,
    pub archive: Vec<String>,
}

impl CapabilitiesConfig {
    /// Build the capability set for a session, preserving the configured
    /// order. Unknown source names degrade that capability at load time
    /// rather than failing here.
    pub fn to_capabilities(&self) -> Vec<Capability> {
        capabilities_from_sources(&self.markdown, &self.docx, &self.archive)
    }
}

/// Export-related knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Format used when the user does not pick one explicitly.
    pub default_format: String,
}

/// Editor shell knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// Title (and initial body text) for freshly created documents.
    pub untitled_title: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PapyrConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PapyrConfig, ConfigError> {
    Loader::new().build()
}
