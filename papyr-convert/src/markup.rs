//! The editor's in-memory markup subset and shared text helpers
//!
//! Documents live in memory as a small HTML subset: `p`, `h1`-`h4`, `b`, `i`,
//! `u`, `ol`/`li`, `ul`/`li` and `br`. Importers produce this subset, the
//! export serializer consumes it.
//!
//! Two invariants hold for every import result:
//! - the content never contains empty paragraph markers (`<p></p>`), and
//! - the content is never empty; an unreadable file yields a literal
//!   placeholder paragraph instead.

use once_cell::sync::Lazy;
use regex::Regex;

/// Substituted when a file's extension has no registered import format.
pub const UNPARSED_PLACEHOLDER: &str = "<p>Unable to parse file content.</p>";

/// Substituted when post-processing leaves no content at all.
pub const EMPTY_PLACEHOLDER: &str = "<p>Empty or unreadable file content.</p>";

/// Substituted when the DOCX converter produces no content.
pub const DOCX_PLACEHOLDER: &str = "<p>Unable to extract DOCX content.</p>";

/// Substituted when an ODT archive has no `content.xml` entry.
pub const ODT_PLACEHOLDER: &str = "<p>Unable to extract ODT content.</p>";

/// Substituted when the fallback Markdown converter fails internally.
pub const MARKDOWN_ERROR_PLACEHOLDER: &str = "<p>Error parsing Markdown content.</p>";

static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// Remove empty paragraph markers left behind by the transducers.
pub fn strip_empty_paragraphs(markup: &str) -> String {
    EMPTY_PARAGRAPH.replace_all(markup, "").into_owned()
}

/// Wrap plain text in paragraphs, one paragraph per line.
pub fn paragraphs_from_text(text: &str) -> String {
    format!("<p>{}</p>", text.replace('\n', "</p><p>"))
}

/// Reduced-fidelity rendering of binary formats read as text: strips
/// everything outside the printable ASCII range (newlines kept), then wraps
/// the remainder in paragraphs.
pub fn sanitized_paragraphs(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|&c| c == '\n' || (' '..='~').contains(&c))
        .collect();
    paragraphs_from_text(&printable)
}
