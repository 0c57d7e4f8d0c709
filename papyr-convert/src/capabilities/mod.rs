//! Built-in capability sources
//!
//! Each submodule wires one capability to a real converter crate. The
//! default chains below are single-source; configuration can reorder or
//! replace them by name via [`capabilities_from_sources`].

pub mod archive;
pub mod docx;
pub mod markdown;

pub use archive::ZipArchiveSource;
pub use docx::OoxmlZipSource;
pub use markdown::ComrakSource;

use crate::capability::{Capability, CapabilityHandle, CapabilityKind, CapabilitySource};
use crate::error::ConvertError;

/// The standard capability set with the default source chains.
pub fn default_capabilities() -> Vec<Capability> {
    vec![
        Capability::new(
            CapabilityKind::MarkdownRenderer,
            vec![Box::new(ComrakSource)],
        ),
        Capability::new(CapabilityKind::DocxConverter, vec![Box::new(OoxmlZipSource)]),
        Capability::new(CapabilityKind::ArchiveReader, vec![Box::new(ZipArchiveSource)]),
    ]
}

/// Build capability chains from configured source names, in priority order.
///
/// Unrecognized names become sources that fail to load, so a typo in the
/// configuration degrades that capability and shows up in the load report
/// instead of being silently dropped.
pub fn capabilities_from_sources(
    markdown: &[String],
    docx: &[String],
    archive: &[String],
) -> Vec<Capability> {
    vec![
        Capability::new(CapabilityKind::MarkdownRenderer, sources_by_name(markdown)),
        Capability::new(CapabilityKind::DocxConverter, sources_by_name(docx)),
        Capability::new(CapabilityKind::ArchiveReader, sources_by_name(archive)),
    ]
}

fn sources_by_name(names: &[String]) -> Vec<Box<dyn CapabilitySource>> {
    names.iter().map(|name| source_by_name(name)).collect()
}

fn source_by_name(name: &str) -> Box<dyn CapabilitySource> {
    match name {
        "comrak" => Box::new(ComrakSource),
        "ooxml-zip" => Box::new(OoxmlZipSource),
        "zip" => Box::new(ZipArchiveSource),
        other => Box::new(UnknownSource {
            name: other.to_string(),
        }),
    }
}

struct UnknownSource {
    name: String,
}

impl CapabilitySource for UnknownSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<CapabilityHandle, ConvertError> {
        Err(ConvertError::CapabilityLoad(format!(
            "{}: unknown capability source",
            self.name
        )))
    }
}
