//! Optional-capability registry and loader
//!
//! Importers lean on external converters that may or may not be usable at
//! runtime: a Markdown renderer, a DOCX converter and a ZIP archive reader.
//! Each is modeled as a [`Capability`] with an ordered chain of
//! [`CapabilitySource`]s. At session start the chains are attempted once;
//! a capability whose chain is exhausted is simply unavailable for the rest
//! of the session and the importers take their fallback paths.
//!
//! Loading never fails as a whole. Every capability gets a [`LoadOutcome`]
//! in the aggregate [`LoadReport`], and one capability's failure never
//! blocks another's. Within one chain, sources are tried strictly in order;
//! only the final exhausted failure is reported.
//!
//! Availability is written exactly once per capability, during
//! [`CapabilityRegistry::load`], and only read afterward. There is no
//! re-probing.

use crate::error::ConvertError;
use std::fmt;

/// The optional conversion features a session may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Renders Markdown source to the editor's markup subset
    MarkdownRenderer,
    /// Converts DOCX bytes to the editor's markup subset
    DocxConverter,
    /// Reads named entries out of ZIP containers
    ArchiveReader,
}

impl CapabilityKind {
    /// Stable identifier used in configuration and reports.
    pub fn name(&self) -> &'static str {
        match self {
            CapabilityKind::MarkdownRenderer => "markdown-renderer",
            CapabilityKind::DocxConverter => "docx-converter",
            CapabilityKind::ArchiveReader => "archive-reader",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders Markdown source into the editor markup subset.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, source: &str) -> Result<String, ConvertError>;
}

/// Converts the bytes of a DOCX container into the editor markup subset.
pub trait DocxConverter: Send + Sync {
    fn convert(&self, bytes: &[u8]) -> Result<String, ConvertError>;
}

/// Reads a named entry out of a ZIP container.
pub trait ArchiveReader: Send + Sync {
    /// Returns the decompressed text of `entry`, or `None` when the archive
    /// has no such entry. A damaged container is an error.
    fn read_entry(&self, archive: &[u8], entry: &str) -> Result<Option<String>, ConvertError>;
}

/// A typed handle produced by a successfully loaded capability source.
///
/// Handles are only reachable through the registry's typed getters, so
/// callers never have to probe whether the underlying converter exists.
pub enum CapabilityHandle {
    MarkdownRenderer(Box<dyn MarkdownRenderer>),
    DocxConverter(Box<dyn DocxConverter>),
    ArchiveReader(Box<dyn ArchiveReader>),
}

impl CapabilityHandle {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            CapabilityHandle::MarkdownRenderer(_) => CapabilityKind::MarkdownRenderer,
            CapabilityHandle::DocxConverter(_) => CapabilityKind::DocxConverter,
            CapabilityHandle::ArchiveReader(_) => CapabilityKind::ArchiveReader,
        }
    }
}

/// One candidate location a capability can be loaded from.
///
/// Sources are named so failures can be attributed ("Failed to load comrak: …").
pub trait CapabilitySource: Send + Sync {
    fn name(&self) -> &str;

    /// Attempt to construct a working handle. Failing here moves the loader
    /// on to the next source in the chain.
    fn load(&self) -> Result<CapabilityHandle, ConvertError>;
}

/// An optional capability with its ordered source chain.
pub struct Capability {
    kind: CapabilityKind,
    sources: Vec<Box<dyn CapabilitySource>>,
}

impl Capability {
    pub fn new(kind: CapabilityKind, sources: Vec<Box<dyn CapabilitySource>>) -> Self {
        Capability { kind, sources }
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }
}

/// Outcome of loading one capability.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub kind: CapabilityKind,
    pub available: bool,
    /// Name of the source that provided the handle, when available.
    pub source: Option<String>,
    /// Error from the last source tried, when the whole chain was exhausted.
    pub error: Option<String>,
}

/// Aggregate result of a capability load.
///
/// Always produced, even when every capability failed; the session decides
/// what to tell the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadReport {
    /// Kinds that became available.
    pub fn loaded(&self) -> Vec<CapabilityKind> {
        self.outcomes
            .iter()
            .filter(|o| o.available)
            .map(|o| o.kind)
            .collect()
    }

    /// Outcomes whose source chains were exhausted.
    pub fn failed(&self) -> Vec<&LoadOutcome> {
        self.outcomes.iter().filter(|o| !o.available).collect()
    }

    pub fn is_available(&self, kind: CapabilityKind) -> bool {
        self.outcomes.iter().any(|o| o.kind == kind && o.available)
    }

    /// User-facing summary of the load, suitable for a status line.
    pub fn summary(&self) -> String {
        let mut message = String::new();
        let failed = self.failed();
        if !failed.is_empty() {
            let details: Vec<String> = failed
                .iter()
                .map(|o| {
                    let reason = o.error.as_deref().unwrap_or("no sources configured");
                    format!("Failed to load {}: {}", o.kind, reason)
                })
                .collect();
            message.push_str(&format!(
                "Some libraries failed to load: {}. ",
                details.join(", ")
            ));
        }
        let loaded = self.loaded();
        if !loaded.is_empty() {
            let names: Vec<&str> = loaded.iter().map(|k| k.name()).collect();
            message.push_str(&format!("Loaded libraries: {}. ", names.join(", ")));
        }
        message.push_str("Basic file support for .txt and .md is available.");
        message
    }
}

/// Loaded capability handles for one session.
///
/// Slots are filled once during [`CapabilityRegistry::load`] and read-only
/// afterward.
#[derive(Default)]
pub struct CapabilityRegistry {
    markdown: Option<Box<dyn MarkdownRenderer>>,
    docx: Option<Box<dyn DocxConverter>>,
    archive: Option<Box<dyn ArchiveReader>>,
}

impl CapabilityRegistry {
    /// A registry with nothing loaded; every import takes its fallback path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attempt every capability's source chain. Chains are tried strictly in
    /// order within one capability; capabilities are independent of each
    /// other and all outcomes are collected.
    pub fn load(capabilities: Vec<Capability>) -> (Self, LoadReport) {
        let mut registry = Self::empty();
        let mut report = LoadReport::default();

        for capability in capabilities {
            let kind = capability.kind;
            let mut winning_source = None;
            let mut last_error = None;

            for source in &capability.sources {
                match source.load() {
                    Ok(handle) if handle.kind() == kind => {
                        registry.install(handle);
                        winning_source = Some(source.name().to_string());
                        break;
                    }
                    Ok(handle) => {
                        log::debug!(
                            "capability source '{}' produced a {} handle while loading {}",
                            source.name(),
                            handle.kind(),
                            kind
                        );
                        last_error = Some(format!(
                            "{}: produced a handle of the wrong kind",
                            source.name()
                        ));
                    }
                    Err(err) => {
                        log::debug!("capability source '{}' failed: {err}", source.name());
                        last_error = Some(err.to_string());
                    }
                }
            }

            let available = winning_source.is_some();
            report.outcomes.push(LoadOutcome {
                kind,
                available,
                source: winning_source,
                error: if available { None } else { last_error },
            });
        }

        (registry, report)
    }

    fn install(&mut self, handle: CapabilityHandle) {
        match handle {
            CapabilityHandle::MarkdownRenderer(renderer) => self.markdown = Some(renderer),
            CapabilityHandle::DocxConverter(converter) => self.docx = Some(converter),
            CapabilityHandle::ArchiveReader(reader) => self.archive = Some(reader),
        }
    }

    pub fn is_available(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::MarkdownRenderer => self.markdown.is_some(),
            CapabilityKind::DocxConverter => self.docx.is_some(),
            CapabilityKind::ArchiveReader => self.archive.is_some(),
        }
    }

    pub fn markdown_renderer(&self) -> Option<&dyn MarkdownRenderer> {
        self.markdown.as_deref()
    }

    pub fn docx_converter(&self) -> Option<&dyn DocxConverter> {
        self.docx.as_deref()
    }

    pub fn archive_reader(&self) -> Option<&dyn ArchiveReader> {
        self.archive.as_deref()
    }
}
