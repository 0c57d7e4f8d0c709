//! Markdown format implementation
//!
//! Import renders Markdown into the editor markup subset; export serializes
//! that subset back to Markdown.
//!
//! # Library Choice
//!
//! Import prefers the renderer capability (comrak) when the session has it.
//! When it does not, `parser` provides a deliberately small pattern
//! pipeline covering the subset users actually paste: headings, bold,
//! italic, underline, flat lists and paragraphs. Export never uses an
//! external library — `serializer` is a bespoke pass reducer over the
//! markup subset, so exporting works in every session.
//!
//! # Element Mapping Table
//!
//! | Markup         | Markdown      | Notes                                   |
//! |----------------|---------------|-----------------------------------------|
//! | `h1`-`h4`      | `#`-`####`    | Deeper headings are not produced        |
//! | `p`            | blank line    |                                         |
//! | `b`/`strong`   | `**text**`    | Import always emits `b`                 |
//! | `i`/`em`       | `*text*`      | Import always emits `i`                 |
//! | `u`            | `__text__`    | Non-standard; kept for the editor       |
//! | `ol`/`li`      | `1.` `2.` …   | Export renumbers by position            |
//! | `ul`/`li`      | `- item`      | Fallback import wraps each line singly  |
//!
//! # Known Limitations
//!
//! The fallback pipeline is not CommonMark. Its italic pass runs after the
//! bold pass and can mis-tokenize literal `**` sequences, and adjacent list
//! lines each become their own one-item list. Both behaviors are kept
//! deliberately; documents round-trip through export equivalently either
//! way.

pub mod parser;
pub mod serializer;

use crate::error::ConvertError;
use crate::format::{ImportFormat, Imported};
use crate::session::ConvertSession;

/// Import format for Markdown files.
pub struct MarkdownImport;

impl ImportFormat for MarkdownImport {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown via the renderer capability, with a pattern fallback"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md"]
    }

    fn import(&self, bytes: &[u8], session: &ConvertSession) -> Result<Imported, ConvertError> {
        let source = String::from_utf8_lossy(bytes);
        if let Some(renderer) = session.capabilities().markdown_renderer() {
            // Renderer failures propagate; the fallback is for absence, not errors.
            return Ok(Imported::from_markup(renderer.render(&source)?));
        }
        log::debug!("markdown-renderer unavailable, using fallback converter");
        Ok(Imported::from_markup(parser::markdown_to_markup(&source)))
    }
}
