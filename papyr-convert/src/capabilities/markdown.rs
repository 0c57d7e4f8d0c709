//! comrak-backed Markdown renderer
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown rendering when it is available as
//! a capability: a single, well-maintained CommonMark implementation with
//! the extensions (tables, strikethrough) users expect from pasted
//! documents. When this source is not in the session's chain, imports fall
//! back to the pattern pipeline in `formats::markdown::parser`.

use crate::capability::{CapabilityHandle, CapabilitySource, MarkdownRenderer};
use crate::error::ConvertError;
use comrak::{markdown_to_html, ComrakOptions};

/// Source that provides the comrak renderer.
pub struct ComrakSource;

impl CapabilitySource for ComrakSource {
    fn name(&self) -> &str {
        "comrak"
    }

    fn load(&self) -> Result<CapabilityHandle, ConvertError> {
        Ok(CapabilityHandle::MarkdownRenderer(Box::new(
            ComrakRenderer::default(),
        )))
    }
}

/// Markdown renderer backed by comrak's CommonMark implementation.
#[derive(Default)]
pub struct ComrakRenderer;

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, source: &str) -> Result<String, ConvertError> {
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        Ok(markdown_to_html(source, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let renderer = ComrakRenderer::default();
        let html = renderer.render("# Title\n\nSome **bold** text.\n").unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn source_loads_a_markdown_handle() {
        let handle = ComrakSource.load().unwrap();
        assert!(matches!(handle, CapabilityHandle::MarkdownRenderer(_)));
    }
}
