//! Document format conversion for the papyr editor
//!
//!     This crate is the conversion layer behind the papyr editor shell: it turns
//!     user-selected files into the editor's in-memory markup subset, and turns that
//!     markup back into downloadable documents.
//!
//!     TLDR: for format authors:
//!         - Implement ImportFormat for the new format and register it in the registry.
//!         - Prefer a capability-backed primary path with a plain-text fallback; never
//!           leave the user with an empty document.
//!         - Warnings are returned as values, never printed; the shell owns presentation.
//!
//! Architecture
//!
//!     The goal is to keep optional converters optional. A session starts by probing
//!     each capability's source chain exactly once (./capability.rs); importers then
//!     ask the session for typed handles and pick the richest path available. Nothing
//!     probes global state and nothing re-checks availability mid-session.
//!
//!     This is a pure lib: it powers papyr-cli but is shell agnostic, so no code here
//!     prints, prompts or touches ambient configuration.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError and the failure taxonomy
//!     ├── markup.rs               # the markup subset, placeholders, shared helpers
//!     ├── capability.rs           # capability kinds, sources, registry, load report
//!     ├── capabilities            # built-in sources (comrak, zip, ooxml-zip)
//!     ├── session.rs              # ConvertSession context object
//!     ├── format.rs               # ImportFormat trait definition
//!     ├── registry.rs             # ImportRegistry for discovery and dispatch
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # fallback Markdown → markup pass pipeline
//!     │   │   └── serializer.rs   # markup → Markdown pass reducer
//!     │   ├── text.rs             # txt import and the raw-text fallback
//!     │   ├── docx.rs             # DOCX import path
//!     │   └── odt.rs              # ODT import path
//!     ├── import.rs               # entry point, title derivation, post-processing
//!     └── export.rs               # fixed export table and the exporter
//!
//! Failure policy
//!
//!     The text transducers never fail: they substitute literal placeholder
//!     paragraphs so the user always gets content. Capability loading never fails as
//!     a whole: each capability degrades independently and the outcomes land in a
//!     LoadReport. Import and export entry points do fail, loudly and per-operation,
//!     wrapped with the file name so the shell can tell the user what broke without
//!     losing the session.
//!
//! Format Selection
//!
//!     Markdown and plain text always work, with or without capabilities. DOCX and
//!     ODT get best-effort container extraction when their capabilities are loaded
//!     and degrade to sanitized raw text when not. Legacy .doc and .pdf have no
//!     parser at all and always take the raw-text path; export to PDF ships plain
//!     text rather than pretending to produce a PDF.

pub mod capabilities;
pub mod capability;
pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod import;
pub mod markup;
pub mod registry;
pub mod session;

pub use capability::{Capability, CapabilityKind, CapabilityRegistry, LoadReport};
pub use error::ConvertError;
pub use export::{export, export_named, ExportFormat, ExportedDocument};
pub use format::{ImportFormat, ImportWarning, Imported};
pub use import::{import_file, title_from_file_name, ImportResult};
pub use registry::ImportRegistry;
pub use session::ConvertSession;
